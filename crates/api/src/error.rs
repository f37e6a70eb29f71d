//! API error type.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gigshield_domain::error::{PricingError, SolvencyError};

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON.
    #[error("Malformed request: {0}")]
    BadRequest(String),
    /// The quote parameters were rejected by the pricing engine.
    #[error("{0}")]
    Pricing(#[from] PricingError),
    /// The pool metrics cannot be assessed.
    #[error("{0}")]
    Solvency(#[from] SolvencyError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Pricing(PricingError::InvalidConfig(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Pricing(_) | Self::Solvency(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "code": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
