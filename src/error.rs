use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde_json::json;
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid rank {n}: must be at least 1")]
    InvalidRank { n: i64 },

    #[error("No numeric values found in the first sheet")]
    EmptyDataset,

    #[error("Requested rank {requested} but only {found} unique values exist")]
    InsufficientRank { requested: usize, found: usize },

    #[error("Cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode spreadsheet: {0}")]
    DecodeFailure(String),

    #[error("File is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<calamine::Error> for AppError {
    fn from(err: calamine::Error) -> Self {
        AppError::DecodeFailure(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRank { .. } => StatusCode::BAD_REQUEST,
            AppError::EmptyDataset => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InsufficientRank { .. } => StatusCode::NOT_FOUND,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::SourceUnavailable { .. }
            | AppError::DecodeFailure(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Ranking outcomes carry no body, only the status.
            AppError::InvalidRank { .. }
            | AppError::EmptyDataset
            | AppError::InsufficientRank { .. } => status.into_response(),
            other => {
                let body = Json(json!({
                    "error": other.to_string()
                }));
                (status, body).into_response()
            }
        }
    }
}
