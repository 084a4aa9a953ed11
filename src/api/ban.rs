use anyhow::bail;
use reqwest::Client;
use tracing::error;

use crate::api::player::{fetch_shop2game, ProviderEndpoints};
use crate::error::ApiError;
use crate::model::ban::BanCheckResult;
use crate::model::provider::BanStatusEnvelope;
use crate::util::{header, message};

pub static BAN_STATUS: &str = "BANNED";
pub static CLEAR_STATUS: &str = "NOT BANNED";

async fn fetch_ban_status(
    client: &Client,
    url: &str,
    player_id: &str,
) -> anyhow::Result<BanStatusEnvelope> {
    let response = client
        .get(url)
        .query(&[("lang", "en"), ("uid", player_id)])
        .headers(header::garena_headers())
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "API request failed with status code: {}",
            response.status().as_u16()
        );
    }
    Ok(response.json::<BanStatusEnvelope>().await?)
}

/// Identity lookup is best effort; only the ban-status lookup is fatal.
pub async fn check_banned(
    client: &Client,
    endpoints: &ProviderEndpoints,
    player_id: &str,
) -> Result<BanCheckResult, ApiError> {
    let (nickname, region) = match fetch_shop2game(client, &endpoints.shop2game, player_id).await {
        Ok(login) => (login.nickname, login.region),
        Err(err) => {
            error!(player_id, "identity lookup failed, continuing: {err}");
            (None, None)
        }
    };

    let envelope = fetch_ban_status(client, &endpoints.ban_check, player_id)
        .await
        .map_err(|err| {
            error!(player_id, "ban status lookup failed: {err}");
            ApiError::Provider(message::MESSAGE_UPSTREAM_FETCH_FAILED.to_string())
        })?;

    let data = envelope.data.unwrap_or_default();
    Ok(ban_verdict(
        player_id,
        nickname,
        region,
        data.is_banned.unwrap_or(0),
        data.period.unwrap_or(0),
    ))
}

/// Pure verdict derivation from the upstream flag pair.
pub fn ban_verdict(
    player_id: &str,
    nickname: Option<String>,
    region: Option<String>,
    is_banned: i64,
    period: i64,
) -> BanCheckResult {
    let banned = is_banned != 0;
    let ban_message = if banned {
        if period > 0 {
            format!("Banned for {} months", period)
        } else {
            "Banned indefinitely".to_string()
        }
    } else {
        CLEAR_STATUS.to_string()
    };

    BanCheckResult {
        player_id: player_id.to_string(),
        nickname,
        region,
        is_banned: banned,
        status: if banned { BAN_STATUS } else { CLEAR_STATUS }.to_string(),
        ban_period: (banned && period > 0).then(|| format!("{} months", period)),
        ban_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_ban_names_the_period() {
        let v = ban_verdict("1", None, None, 1, 3);
        assert!(v.is_banned);
        assert_eq!(v.status, "BANNED");
        assert_eq!(v.ban_period.as_deref(), Some("3 months"));
        assert_eq!(v.ban_message, "Banned for 3 months");
    }

    #[test]
    fn zero_period_ban_is_indefinite() {
        let v = ban_verdict("1", None, None, 1, 0);
        assert!(v.is_banned);
        assert_eq!(v.ban_period, None);
        assert_eq!(v.ban_message, "Banned indefinitely");
    }

    #[test]
    fn unbanned_ignores_the_period() {
        let v = ban_verdict("1", Some("Nick".into()), Some("BD".into()), 0, 7);
        assert!(!v.is_banned);
        assert_eq!(v.status, "NOT BANNED");
        assert_eq!(v.ban_period, None);
        assert_eq!(v.ban_message, "NOT BANNED");
        assert_eq!(v.nickname.as_deref(), Some("Nick"));
    }

    #[test]
    fn truthy_flag_values_count_as_banned() {
        assert!(ban_verdict("1", None, None, 2, 1).is_banned);
    }
}
