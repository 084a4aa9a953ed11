use super::DBResult;
use crate::model::admin::LogRow;
use rocket::serde::json::Value;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub struct NewEvent<'a> {
    pub user_id: Option<i64>,
    pub action: &'a str,
    pub success: bool,
    pub ip: &'a str,
    pub user_agent: &'a str,
    pub details: Option<Value>,
}

pub async fn record_event(pool: &Pool<Sqlite>, event: NewEvent<'_>) -> DBResult<()> {
    let mut connection = pool.acquire().await?;
    sqlx::query(
        r#"
        INSERT INTO logs (user_id, action, success, ip, user_agent, details, timestamp)
        VALUES ($1, $2, $3, $4, $5, $6, $7);
        "#,
    )
    .bind(event.user_id)
    .bind(event.action)
    .bind(event.success)
    .bind(event.ip)
    .bind(event.user_agent)
    .bind(event.details.as_ref().map(|d| d.to_string()))
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(&mut *connection)
    .await?;

    info!(
        action = event.action,
        success = event.success,
        user_id = event.user_id,
        "event recorded"
    );
    Ok(())
}

/// Log rows joined with the acting user, newest first, paginated.
pub async fn list_logs(pool: &Pool<Sqlite>, limit: i64, skip: i64) -> DBResult<Vec<LogRow>> {
    let mut connection = pool.acquire().await?;
    let logs = sqlx::query_as::<_, LogRow>(
        r#"
        SELECT l.id, l.timestamp, l.action, l.success, l.ip, l.user_agent, l.details,
               l.user_id, u.username, u.email
        FROM logs l
        LEFT JOIN users u ON u.id = l.user_id
        ORDER BY l.timestamp DESC
        LIMIT $1 OFFSET $2;
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *connection)
    .await?;

    Ok(logs)
}

pub async fn count_logs(pool: &Pool<Sqlite>) -> DBResult<i64> {
    let mut connection = pool.acquire().await?;
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM logs;")
        .fetch_one(&mut *connection)
        .await?;

    Ok(total)
}
