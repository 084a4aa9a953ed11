use anyhow::bail;
use reqwest::Client;
use tracing::info;

use crate::model::provider::LikeApiResponse;
use crate::model::sender::LikeSummary;
use crate::util::{header, message};

pub async fn send_likes(
    client: &Client,
    url: &str,
    uid: &str,
    server_name: &str,
) -> anyhow::Result<LikeSummary> {
    info!(url, uid, server_name, "sending likes");
    let response = client
        .get(url)
        .query(&[("uid", uid), ("server_name", &server_name.to_lowercase())])
        .headers(header::browser_headers())
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "API request failed with status code: {}",
            response.status().as_u16()
        );
    }
    let raw = response.json::<LikeApiResponse>().await?;
    Ok(summarize(raw, uid))
}

fn summarize(raw: LikeApiResponse, uid: &str) -> LikeSummary {
    LikeSummary {
        status: if raw.status == Some(1) {
            message::STATUS_SUCCESS
        } else {
            message::STATUS_ERROR
        }
        .to_string(),
        nickname: raw
            .player_nickname
            .unwrap_or_else(|| "Unknown Player".to_string()),
        uid: raw.uid.unwrap_or_else(|| uid.to_string()),
        likes_sent: raw.likes_given.unwrap_or(0),
        likes_before: raw.likes_before.unwrap_or(0),
        likes_after: raw.likes_after.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_counters_flow_through() {
        let raw: LikeApiResponse = serde_json::from_value(json!({
            "status": 1,
            "PlayerNickname": "Akira",
            "UID": 556677,
            "LikesGivenByAPI": 100,
            "LikesbeforeCommand": 900,
            "LikesafterCommand": 1000,
        }))
        .unwrap();
        let summary = summarize(raw, "556677");
        assert_eq!(summary.status, "success");
        assert_eq!(summary.nickname, "Akira");
        assert_eq!(summary.uid, "556677");
        assert_eq!(summary.likes_sent, 100);
        assert_eq!(summary.likes_after, 1000);
    }

    #[test]
    fn missing_fields_default_to_zero_and_request_uid() {
        let summary = summarize(LikeApiResponse::default(), "42");
        assert_eq!(summary.status, "error");
        assert_eq!(summary.nickname, "Unknown Player");
        assert_eq!(summary.uid, "42");
        assert_eq!(summary.likes_sent, 0);
        assert_eq!(summary.likes_before, 0);
    }
}
