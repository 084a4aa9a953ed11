use reqwest::Client;
use rocket::serde::json::{json, Value};
use sqlx::{Pool, Sqlite};
use tracing::error;

use crate::api::player::ProviderEndpoints;
use crate::api::{admin, ban, guest, likes, player, sensitivity, visits};
use crate::error::ApiError;
use crate::middleware::auth::AdminUser;
use crate::model::provider::ProviderPayload;
use crate::model::response::{ApiStatus, ResponseWithStatus};
use crate::util::message;

fn rejected(err: ApiError) -> ResponseWithStatus {
    ResponseWithStatus::new(err.api_status(), err.to_string(), None)
}

pub async fn get_player_info(
    client: &Client,
    endpoints: &ProviderEndpoints,
    id: Option<&str>,
    region: Option<&str>,
) -> ResponseWithStatus {
    let Some(id) = id.filter(|value| !value.is_empty()) else {
        return rejected(ApiError::validation(message::MESSAGE_PLAYER_ID_REQUIRED))
            .with_credits(Some(message::CREDITS_DEFAULT.to_string()));
    };
    let region = region
        .filter(|value| !value.is_empty())
        .unwrap_or(player::DEFAULT_REGION);

    match player::lookup_player(client, endpoints, id, region).await {
        Ok(lookup) => ResponseWithStatus::new(
            ApiStatus::Ok,
            lookup.message.to_string(),
            Some(json!(lookup.data)),
        )
        .with_credits(lookup.credits),
        Err(err) => {
            error!("player lookup exhausted: {err}");
            ResponseWithStatus::new(
                err.api_status(),
                format!("An unexpected error occurred: {}", err),
                None,
            )
        }
    }
}

pub fn ingest_player_callback(payload: &ProviderPayload) -> ResponseWithStatus {
    let data = player::ingest_callback(payload);
    ResponseWithStatus::new(
        ApiStatus::Ok,
        message::MESSAGE_CALLBACK_OK.to_string(),
        Some(json!(data)),
    )
}

pub async fn send_likes(
    client: &Client,
    endpoints: &ProviderEndpoints,
    uid: Option<&str>,
    server_name: Option<&str>,
) -> ResponseWithStatus {
    let Some(uid) = uid.filter(|value| !value.is_empty()) else {
        return rejected(ApiError::validation(message::MESSAGE_UID_REQUIRED));
    };
    let server_name = server_name
        .filter(|value| !value.is_empty())
        .unwrap_or(player::DEFAULT_REGION);

    match likes::send_likes(client, &endpoints.like, uid, server_name).await {
        Ok(summary) => ResponseWithStatus::new(
            ApiStatus::Ok,
            message::MESSAGE_LIKES_OK.to_string(),
            Some(json!(summary)),
        ),
        Err(err) => {
            error!("like sender failed: {err}");
            let err = ApiError::Provider(err.to_string());
            ResponseWithStatus::new(err.api_status(), format!("Failed to send likes: {}", err), None)
        }
    }
}

pub async fn send_visits(
    client: &Client,
    endpoints: &ProviderEndpoints,
    uid: Option<&str>,
    server_name: Option<&str>,
) -> ResponseWithStatus {
    let Some(uid) = uid.filter(|value| !value.is_empty()) else {
        return rejected(ApiError::validation(message::MESSAGE_UID_REQUIRED));
    };
    let server_name = server_name
        .filter(|value| !value.is_empty())
        .unwrap_or(visits::SUPPORTED_REGION);
    if !visits::region_supported(server_name) {
        return rejected(ApiError::validation(message::MESSAGE_VISITS_BD_ONLY));
    }

    match visits::send_visits(client, &endpoints.visit, uid).await {
        Ok(summary) => ResponseWithStatus::new(
            ApiStatus::Ok,
            message::MESSAGE_VISITS_OK.to_string(),
            Some(json!(summary)),
        ),
        Err(err) => {
            error!("visit sender failed: {err}");
            let err = ApiError::Provider(err.to_string());
            ResponseWithStatus::new(err.api_status(), format!("Failed to send visits: {}", err), None)
        }
    }
}

pub fn sensitivity(
    old_sens: Option<&str>,
    old_dpi: Option<&str>,
    new_dpi: Option<&str>,
) -> ResponseWithStatus {
    let parsed = (
        old_sens.and_then(|value| value.parse::<f64>().ok()),
        old_dpi.and_then(|value| value.parse::<i64>().ok()),
        new_dpi.and_then(|value| value.parse::<i64>().ok()),
    );
    let result = match parsed {
        (Some(sens), Some(old), Some(new)) => sensitivity::convert(sens, old, new),
        _ => None,
    };

    match result {
        Some(result) => ResponseWithStatus::new(
            ApiStatus::Ok,
            message::MESSAGE_SENSITIVITY_OK.to_string(),
            Some(json!(result)),
        ),
        None => rejected(ApiError::validation(message::MESSAGE_SENSITIVITY_PARAMS)),
    }
}

pub async fn check_ban(
    client: &Client,
    endpoints: &ProviderEndpoints,
    check: Option<&str>,
    id: Option<&str>,
) -> (ApiStatus, Value) {
    let Some(id) = id.filter(|value| !value.is_empty()) else {
        return (
            ApiStatus::BadRequest,
            json!({ "error": message::MESSAGE_PLAYER_ID_REQUIRED }),
        );
    };
    if check != Some("checkbanned") {
        return (
            ApiStatus::BadRequest,
            json!({ "error": message::MESSAGE_INVALID_ACTION }),
        );
    }

    match ban::check_banned(client, endpoints, id).await {
        Ok(result) => (ApiStatus::Ok, json!(result)),
        Err(err) => (err.api_status(), json!({ "error": err.to_string() })),
    }
}

pub fn combine_guests(files: &[&[u8]]) -> (ApiStatus, Value) {
    if files.is_empty() {
        let err = ApiError::validation(message::MESSAGE_NO_FILES);
        return (err.api_status(), json!({ "error": err.to_string() }));
    }
    let combined = guest::combine_guest_files(files);
    if combined.is_empty() {
        let err = ApiError::Parse(message::MESSAGE_NO_VALID_GUEST_DATA.to_string());
        return (err.api_status(), json!({ "error": err.to_string() }));
    }
    (ApiStatus::Ok, json!({ "success": true, "data": combined }))
}

pub async fn admin_users(pool: &Pool<Sqlite>, admin: &AdminUser) -> (ApiStatus, Value) {
    match admin::view_users(pool, admin).await {
        Ok(body) => (ApiStatus::Ok, body),
        Err(err) => {
            error!("user listing failed: {err}");
            (
                err.api_status(),
                json!({ "error": message::MESSAGE_USERS_FETCH_FAILED }),
            )
        }
    }
}

pub async fn admin_logs(
    pool: &Pool<Sqlite>,
    admin: &AdminUser,
    limit: Option<i64>,
    skip: Option<i64>,
) -> (ApiStatus, Value) {
    match admin::view_logs(pool, admin, limit, skip).await {
        Ok(body) => (ApiStatus::Ok, body),
        Err(err) => {
            error!("log listing failed: {err}");
            (
                err.api_status(),
                json!({ "error": message::MESSAGE_LOGS_FETCH_FAILED }),
            )
        }
    }
}
