use super::DBResult;
use crate::model::admin::{AdminUserRow, TokenOwner};
use crate::util::message;
use futures::TryStreamExt;
use sqlx::{Pool, Sqlite};

/// All users, newest first, each with the count of its `api_call` log rows.
pub async fn list_users_with_activity(pool: &Pool<Sqlite>) -> DBResult<Vec<AdminUserRow>> {
    let mut connection = pool.acquire().await?;
    let users = sqlx::query_as::<_, AdminUserRow>(
        r#"
        SELECT u.id, u.username, u.email, u.created_at, u.is_admin, u.balance, u.last_login,
               COUNT(CASE WHEN l.action = $1 THEN 1 END) AS api_calls
        FROM users u
        LEFT JOIN logs l ON l.user_id = u.id
        GROUP BY u.id
        ORDER BY u.created_at DESC;
        "#,
    )
    .bind(message::LOG_ACTION_API_CALL)
    .fetch(&mut *connection)
    .try_collect::<Vec<_>>()
    .await?;

    Ok(users)
}

pub async fn find_token_owner(pool: &Pool<Sqlite>, token: &str) -> DBResult<Option<TokenOwner>> {
    let mut connection = pool.acquire().await?;
    let owner = sqlx::query_as::<_, TokenOwner>(
        r#"
        SELECT u.id, u.is_admin
        FROM api_tokens t
        JOIN users u ON u.id = t.user_id
        WHERE t.token = $1;
        "#,
    )
    .bind(token)
    .fetch_optional(&mut *connection)
    .await?;

    Ok(owner)
}
