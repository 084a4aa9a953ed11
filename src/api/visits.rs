use anyhow::bail;
use reqwest::Client;
use tracing::info;

use crate::model::provider::VisitApiResponse;
use crate::model::sender::VisitSummary;
use crate::util::header;

pub static SUPPORTED_REGION: &str = "bd";

/// The visit provider only serves the Bangladesh shard.
pub fn region_supported(server_name: &str) -> bool {
    server_name.eq_ignore_ascii_case(SUPPORTED_REGION)
}

pub async fn send_visits(client: &Client, base_url: &str, uid: &str) -> anyhow::Result<VisitSummary> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), uid);
    info!(url, uid, "sending visits");
    let response = client
        .get(&url)
        .headers(header::browser_headers())
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "API request failed with status code: {}",
            response.status().as_u16()
        );
    }
    let raw = response.json::<VisitApiResponse>().await?;
    Ok(summarize(raw, uid))
}

fn summarize(raw: VisitApiResponse, uid: &str) -> VisitSummary {
    VisitSummary {
        success: raw.success.unwrap_or(false),
        total_time_takes: raw.total_time_takes.unwrap_or(0.0),
        total_views_sent: raw.total_views_sent.unwrap_or(0),
        uid: uid.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_bd_is_supported() {
        assert!(region_supported("bd"));
        assert!(region_supported("BD"));
        assert!(!region_supported("ind"));
        assert!(!region_supported("sg"));
    }

    #[test]
    fn counters_flow_through_with_defaults() {
        let raw: VisitApiResponse = serde_json::from_value(json!({
            "success": true,
            "total_time_takes": 12.8,
            "total_views_sent": 1000,
        }))
        .unwrap();
        let summary = summarize(raw, "42");
        assert!(summary.success);
        assert_eq!(summary.total_views_sent, 1000);
        assert_eq!(summary.uid, "42");

        let empty = summarize(VisitApiResponse::default(), "42");
        assert!(!empty.success);
        assert_eq!(empty.total_time_takes, 0.0);
    }
}
