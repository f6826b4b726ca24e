//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::PlacementError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Order placement error.
    Placement(PlacementError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Placement(err) => placement_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn placement_error_to_response(err: PlacementError) -> (StatusCode, String) {
    let status = match &err {
        PlacementError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
        PlacementError::OutOfStock { .. } => StatusCode::CONFLICT,
        PlacementError::InventoryUnavailable(_) => StatusCode::BAD_GATEWAY,
        PlacementError::PersistenceFailed(_) => {
            tracing::error!(error = %err, "order persistence failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        PlacementError::Cancelled => StatusCode::GATEWAY_TIMEOUT,
    };
    (status, err.to_string())
}

impl From<PlacementError> for ApiError {
    fn from(err: PlacementError) -> Self {
        ApiError::Placement(err)
    }
}
