use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid or unknown game: {0}")]
    InvalidGame(i32),

    #[error("Game service unavailable")]
    GameServiceUnavailable,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidGame(game_id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid or unknown game: {game_id}"),
            ),
            AppError::GameServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Game service is unavailable right now, try again later".into(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            // Detail is logged where the error is handled; the response body
            // never carries storage internals.
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal storage error".into(),
            ),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_response_hides_storage_details() {
        let err = AppError::DatabaseError("connection refused to db:5432".into());
        let (status, body) = err.to_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("connection refused"));
        assert!(!body.contains("5432"));
        // The diagnostic stays available for logging
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            AppError::Validation("bad".into()).to_response().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidGame(7).to_response().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::GameServiceUnavailable.to_response().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::NotFound("review".into()).to_response().0,
            StatusCode::NOT_FOUND
        );
    }
}
