use rocket::serde::{Serialize, Deserialize, json::Value};

use std::fmt::{Display, Formatter, Result};
use crate::util::message;

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Response {
    pub status: String,
    pub message: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ResponseWithStatus {
    pub status_code: u16,
    pub response: Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub enum ApiStatus {
    Ok,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
}

impl ApiStatus {
    pub fn code(&self) -> u16 {
        match self {
            ApiStatus::Ok => 200,
            ApiStatus::BadRequest => 400,
            ApiStatus::Unauthorized => 401,
            ApiStatus::Forbidden => 403,
            ApiStatus::NotFound => 404,
            ApiStatus::UnprocessableEntity => 422,
            ApiStatus::TooManyRequests => 429,
            ApiStatus::InternalServerError => 500,
        }
    }
}

// The wire envelope only distinguishes success from error.
impl Display for ApiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ApiStatus::Ok => write!(f, "{}", message::STATUS_SUCCESS),
            _ => write!(f, "{}", message::STATUS_ERROR),
        }
    }
}

impl ResponseWithStatus {
    pub fn new(status: ApiStatus, message: String, data: Option<Value>) -> Self {
        ResponseWithStatus {
            status_code: status.code(),
            response: Response {
                status: status.to_string(),
                message,
                data,
                credits: None,
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    pub fn with_credits(mut self, credits: Option<String>) -> Self {
        self.response.credits = credits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_status_strings_collapse_to_success_or_error() {
        assert_eq!(ApiStatus::Ok.to_string(), "success");
        assert_eq!(ApiStatus::BadRequest.to_string(), "error");
        assert_eq!(ApiStatus::InternalServerError.to_string(), "error");
    }

    #[test]
    fn credits_field_is_omitted_unless_set() {
        let plain = ResponseWithStatus::new(ApiStatus::Ok, "done".to_string(), None);
        let json = serde_json::to_value(&plain.response).unwrap();
        assert!(json.get("credits").is_none());
        assert!(json.get("data").is_none());
        assert!(json.get("timestamp").is_some());

        let credited = ResponseWithStatus::new(ApiStatus::Ok, "done".to_string(), None)
            .with_credits(Some("someone".to_string()));
        let json = serde_json::to_value(&credited.response).unwrap();
        assert_eq!(json["credits"], "someone");
    }
}
