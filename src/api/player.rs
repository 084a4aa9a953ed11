use anyhow::bail;
use reqwest::Client;
use tracing::{error, info};

use crate::error::ApiError;
use crate::model::player::PlayerData;
use crate::model::provider::{ProviderPayload, Shop2GameLogin};
use crate::normalize;
use crate::util::{header, message};

pub static PRIMARY_PLAYER_API: &str = "https://ariiflexlabs-playerinfo-icxc.onrender.com/ff_info";
// Currently the same upstream as the primary; kept as a distinct tier so the
// chain order and per-tier messages survive a URL change.
pub static SECONDARY_PLAYER_API: &str = "https://ariiflexlabs-playerinfo-icxc.onrender.com/ff_info";
pub static SHOP2GAME_LOGIN_API: &str = "https://shop2game.com/api/auth/player_id_login";
pub static BAN_CHECK_API: &str = "https://ff.garena.com/api/antihack/check_banned";
pub static LIKE_API: &str = "https://myapihanif.vercel.app/like";
pub static VISIT_API: &str = "https://hanif-visit.vercel.app";

pub static SHOP2GAME_APP_ID: u32 = 100067;
pub static DEFAULT_REGION: &str = "ind";
pub static CALLBACK_REGION: &str = "IND";

/// Upstream endpoint set, injected through managed state so handlers never
/// reach for globals.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub primary: String,
    pub secondary: String,
    pub shop2game: String,
    pub ban_check: String,
    pub like: String,
    pub visit: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        ProviderEndpoints {
            primary: PRIMARY_PLAYER_API.to_string(),
            secondary: SECONDARY_PLAYER_API.to_string(),
            shop2game: SHOP2GAME_LOGIN_API.to_string(),
            ban_check: BAN_CHECK_API.to_string(),
            like: LIKE_API.to_string(),
            visit: VISIT_API.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProviderTier {
    Primary,
    Secondary,
    Shop2Game,
}

// Attempt order of the fallback chain; one shot per tier, no retries.
static TIERS: [ProviderTier; 3] = [
    ProviderTier::Primary,
    ProviderTier::Secondary,
    ProviderTier::Shop2Game,
];

pub struct PlayerLookup {
    pub data: PlayerData,
    pub message: &'static str,
    /// Envelope-level attribution, set by the fallback tiers.
    pub credits: Option<String>,
}

async fn fetch_rich(
    client: &Client,
    url: &str,
    player_id: &str,
    region: &str,
) -> anyhow::Result<ProviderPayload> {
    info!(url, player_id, "fetching player info");
    let response = client
        .get(url)
        .query(&[("uid", player_id), ("region", region)])
        .headers(header::browser_headers())
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "API request failed with status code: {}",
            response.status().as_u16()
        );
    }
    Ok(response.json::<ProviderPayload>().await?)
}

pub async fn fetch_shop2game(
    client: &Client,
    url: &str,
    player_id: &str,
) -> anyhow::Result<Shop2GameLogin> {
    let body = serde_json::json!({
        "app_id": SHOP2GAME_APP_ID,
        "login_id": player_id,
        "app_server_id": 0,
    });
    let response = client
        .post(url)
        .headers(header::shop2game_headers())
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "API request failed with status code: {}",
            response.status().as_u16()
        );
    }
    Ok(response.json::<Shop2GameLogin>().await?)
}

async fn try_tier(
    client: &Client,
    endpoints: &ProviderEndpoints,
    tier: ProviderTier,
    player_id: &str,
    region: &str,
) -> anyhow::Result<PlayerLookup> {
    match tier {
        ProviderTier::Primary => {
            let payload = fetch_rich(client, &endpoints.primary, player_id, region).await?;
            Ok(PlayerLookup {
                data: normalize::normalize_player(&payload, player_id, region, message::CREDITS_DEFAULT),
                message: message::MESSAGE_PLAYER_INFO_OK,
                credits: None,
            })
        }
        ProviderTier::Secondary => {
            let payload = fetch_rich(client, &endpoints.secondary, player_id, region).await?;
            let data =
                normalize::normalize_player(&payload, player_id, region, message::CREDITS_ARIFLEX);
            let credits = data.credits.clone();
            Ok(PlayerLookup {
                data,
                message: message::MESSAGE_PLAYER_INFO_FALLBACK,
                credits: Some(credits),
            })
        }
        ProviderTier::Shop2Game => {
            let login = fetch_shop2game(client, &endpoints.shop2game, player_id).await?;
            Ok(PlayerLookup {
                data: normalize::normalize_shop2game(&login, player_id),
                message: message::MESSAGE_PLAYER_INFO_LIMITED,
                credits: Some(message::CREDITS_SHOP2GAME.to_string()),
            })
        }
    }
}

/// Walks the provider tiers strictly in order, short-circuiting on the first
/// success. Exhaustion surfaces a single aggregated error carrying the last
/// tier's failure.
pub async fn lookup_player(
    client: &Client,
    endpoints: &ProviderEndpoints,
    player_id: &str,
    region: &str,
) -> Result<PlayerLookup, ApiError> {
    let region = region.to_lowercase();
    let mut last_error: Option<anyhow::Error> = None;

    for tier in TIERS {
        match try_tier(client, endpoints, tier, player_id, &region).await {
            Ok(lookup) => {
                info!(?tier, player_id, "player lookup succeeded");
                return Ok(lookup);
            }
            Err(err) => {
                error!(?tier, player_id, "provider attempt failed: {err}");
                last_error = Some(err);
            }
        }
    }

    Err(ApiError::Provider(
        last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "no provider available".to_string()),
    ))
}

/// Webhook-pushed payloads skip dispatch and fallback entirely.
pub fn ingest_callback(payload: &ProviderPayload) -> PlayerData {
    let player_id = normalize::callback_player_id(payload);
    normalize::normalize_player(payload, &player_id, CALLBACK_REGION, message::CREDITS_CALLBACK)
}
