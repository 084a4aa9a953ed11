use rocket::serde::json::{json, Value};
use sqlx::{Pool, Sqlite};
use tracing::warn;

use crate::db::log::{count_logs, list_logs, record_event, NewEvent};
use crate::db::user::list_users_with_activity;
use crate::error::ApiError;
use crate::middleware::auth::AdminUser;
use crate::util::message;

pub static DEFAULT_LOG_LIMIT: i64 = 100;

/// Audit-trail writes never fail an admin request.
async fn audit(pool: &Pool<Sqlite>, admin: &AdminUser, action: &str, description: &str) {
    let event = NewEvent {
        user_id: Some(admin.user_id),
        action,
        success: true,
        ip: &admin.ip,
        user_agent: &admin.user_agent,
        details: Some(json!({ "description": description })),
    };
    if let Err(err) = record_event(pool, event).await {
        warn!(action, "audit log write failed: {:?}", err.0);
    }
}

pub async fn view_users(pool: &Pool<Sqlite>, admin: &AdminUser) -> Result<Value, ApiError> {
    let users = list_users_with_activity(pool).await.map_err(|e| ApiError::from(e.0))?;
    audit(pool, admin, message::LOG_ACTION_VIEW_USERS, "Admin viewed all users list").await;
    Ok(json!({ "users": users }))
}

pub async fn view_logs(
    pool: &Pool<Sqlite>,
    admin: &AdminUser,
    limit: Option<i64>,
    skip: Option<i64>,
) -> Result<Value, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT).max(0);
    let skip = skip.unwrap_or(0).max(0);

    let logs = list_logs(pool, limit, skip).await.map_err(|e| ApiError::from(e.0))?;
    let total = count_logs(pool).await.map_err(|e| ApiError::from(e.0))?;
    audit(pool, admin, message::LOG_ACTION_VIEW_LOGS, "Admin viewed system logs").await;
    Ok(json!({ "logs": logs, "total": total }))
}
