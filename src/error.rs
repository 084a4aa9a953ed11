use thiserror::Error;

use crate::model::response::ApiStatus;

/// Failure taxonomy for the whole API surface.
///
/// Provider failures are caught tier-by-tier inside the fallback chain and
/// only reach a handler once every tier is exhausted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: &str) -> Self {
        ApiError::Validation(message.to_string())
    }

    pub fn api_status(&self) -> ApiStatus {
        match self {
            ApiError::Validation(_) | ApiError::Parse(_) => ApiStatus::BadRequest,
            ApiError::Provider(_) | ApiError::Unexpected(_) => ApiStatus::InternalServerError,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Unexpected(err.into())
    }
}
