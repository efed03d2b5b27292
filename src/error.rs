use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NoData(String),

    #[error("{0}")]
    Other(String),
}

impl From<tokio::io::Error> for AppError {
    fn from(err: tokio::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl AppError {
    /// HTTP status used when the error escapes a JSON handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// Alias for convenience
pub type Error = AppError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Config("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Network("x".into()).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_display_messages() {
        let err = AppError::Config("plotly renderer is not configured".to_string());
        assert_eq!(err.to_string(), "Configuration error: plotly renderer is not configured");

        let err = AppError::InvalidInput("Please submit a single letter".to_string());
        assert_eq!(err.to_string(), "Please submit a single letter");
    }
}
