use rocket::serde::{Serialize, Deserialize};

/// Flat (non-enveloped) reply of the ban checker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BanCheckResult {
    pub player_id: String,
    pub nickname: Option<String>,
    pub region: Option<String>,
    pub is_banned: bool,
    pub status: String,
    pub ban_period: Option<String>,
    pub ban_message: String,
}
