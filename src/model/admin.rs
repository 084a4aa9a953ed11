use rocket::serde::{Serialize, Deserialize};
use sqlx::FromRow;

/// One row of the admin user listing; `api_calls` is the count of that
/// user's `api_call` log entries.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
#[serde(crate = "rocket::serde")]
pub struct AdminUserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub is_admin: bool,
    pub balance: i64,
    pub last_login: Option<String>,
    pub api_calls: i64,
}

/// One row of the admin log listing, joined with the acting user when one
/// is recorded.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
#[serde(crate = "rocket::serde")]
pub struct LogRow {
    pub id: i64,
    pub timestamp: String,
    pub action: String,
    pub success: bool,
    pub ip: String,
    pub user_agent: String,
    // JSON document stored as text, returned verbatim.
    pub details: Option<String>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TokenOwner {
    pub id: i64,
    pub is_admin: bool,
}
