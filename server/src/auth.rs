//! Shared-token check applied to every search route.

use axum::{
    extract::{Request, State},
    http::HeaderName,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::SearchError;
use crate::AppState;

pub static ACCESS_TOKEN_HEADER: HeaderName = HeaderName::from_static("accesstoken");

/// Reject the request with 401 unless the `AccessToken` header equals the
/// configured token exactly.
pub async fn require_access_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, SearchError> {
    let provided = request
        .headers()
        .get(&ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.access_token.as_ref()) {
        warn!(uri = %request.uri(), "rejected request with bad access token");
        return Err(SearchError::Unauthorized);
    }

    Ok(next.run(request).await)
}
