use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unrecognized status '{raw_status}' for gateway {gateway}")]
    UnrecognizedStatus { gateway: String, raw_status: String },

    #[error("No campaign associated with integration {0}")]
    NoCampaignAssociated(String),

    #[error("Integration {integration_id} belongs to gateway {expected}, webhook posted to {got}")]
    IntegrationMismatch {
        integration_id: String,
        expected: String,
        got: String,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Permanent errors report a machine-readable reason so gateway
        // dashboards show why the delivery was rejected. Anything unexpected
        // is logged in full and surfaced as an opaque 500, because gateways
        // retry on 5xx and we do not want internals echoed back.
        let (status, error) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("missing required field: {}", field),
            ),
            AppError::UnrecognizedStatus { .. }
            | AppError::NoCampaignAssociated(_)
            | AppError::IntegrationMismatch { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Json(e) => {
                tracing::error!("JSON error: {}", e);
                (StatusCode::BAD_REQUEST, "Invalid JSON".to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
