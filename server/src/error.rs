//! Request errors and their wire encoding.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason sent when the sort field is not one the server knows.
pub const BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Body of every 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    #[serde(rename = "Error")]
    pub error: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("bad access token")]
    Unauthorized,

    #[error("unknown order field {0:?}")]
    BadOrderField(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for SearchError {
    /// 401 and 500 carry plain text; only 400 uses the JSON payload.
    fn into_response(self) -> Response {
        match self {
            SearchError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Bad access token").into_response()
            }
            SearchError::BadOrderField(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorPayload {
                    error: BAD_ORDER_FIELD.to_string(),
                }),
            )
                .into_response(),
            SearchError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
