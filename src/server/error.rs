//! API error types and JSON response formatting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::GameId;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Game not found error.
    pub fn game_not_found(id: GameId) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "GAME_NOT_FOUND",
            format!("Game {} not found", id),
        )
        .with_details(serde_json::json!({ "id": id }))
    }

    /// Price range with a lower bound above the upper bound.
    pub fn invalid_price_range(min: f64, max: f64) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "INVALID_PRICE_RANGE",
            format!("min_price {} is greater than max_price {}", min, max),
        )
        .with_details(serde_json::json!({ "min_price": min, "max_price": max }))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
