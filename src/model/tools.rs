use rocket::serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SensitivityResult {
    #[serde(rename = "oldSensitivity")]
    pub old_sensitivity: f64,
    #[serde(rename = "oldDpi")]
    pub old_dpi: i64,
    #[serde(rename = "newDpi")]
    pub new_dpi: i64,
    #[serde(rename = "newSensitivity")]
    pub new_sensitivity: f64,
}

/// One uid/password pair extracted from an uploaded guest dump.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct GuestCredential {
    pub uid: String,
    pub password: String,
}
