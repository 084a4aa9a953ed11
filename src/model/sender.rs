use rocket::serde::{Serialize, Deserialize};

/// Reshaped like-sender result, embedded in the response envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct LikeSummary {
    pub status: String,
    pub nickname: String,
    pub uid: String,
    #[serde(rename = "likesSent")]
    pub likes_sent: i64,
    #[serde(rename = "likesBefore")]
    pub likes_before: i64,
    #[serde(rename = "likesAfter")]
    pub likes_after: i64,
}

/// Reshaped visit-sender result, embedded in the response envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct VisitSummary {
    pub success: bool,
    #[serde(rename = "totalTimeTakes")]
    pub total_time_takes: f64,
    #[serde(rename = "totalViewsSent")]
    pub total_views_sent: i64,
    pub uid: String,
}
