use crate::model::tools::SensitivityResult;

/// DPI transfer: `newSens = oldSens * oldDpi / newDpi`, rounded to two
/// decimals.
pub fn convert(old_sens: f64, old_dpi: i64, new_dpi: i64) -> Option<SensitivityResult> {
    if new_dpi <= 0 || old_dpi <= 0 || !old_sens.is_finite() {
        return None;
    }
    let new_sensitivity = old_sens * old_dpi as f64 / new_dpi as f64;
    Some(SensitivityResult {
        old_sensitivity: old_sens,
        old_dpi,
        new_dpi,
        new_sensitivity: (new_sensitivity * 100.0).round() / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_dpi_doubles_sensitivity() {
        let result = convert(1.5, 800, 400).unwrap();
        assert_eq!(result.new_sensitivity, 3.0);
    }

    #[test]
    fn result_rounds_to_two_decimals() {
        let result = convert(1.0, 1000, 300).unwrap();
        assert_eq!(result.new_sensitivity, 3.33);
    }

    #[test]
    fn non_positive_dpi_is_rejected() {
        assert!(convert(1.0, 800, 0).is_none());
        assert!(convert(1.0, 0, 400).is_none());
    }
}
