//! Translate an `HttpResponse` into a page of users or a `ClientError`.

use tracing::debug;

use crate::error::ClientError;
use crate::http::HttpResponse;
use crate::query::SearchQuery;
use crate::types::{ErrorPayload, SearchResponse, User};

/// Reason the server sends when the sort field is not one it knows.
pub const BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Whether the decoder reads the body for `status`. Every other status is
/// decided on the code alone.
pub fn reads_body(status: u16) -> bool {
    matches!(status, 200 | 400)
}

/// Decode `response` for the search described by `query`.
///
/// 401 and 500 are decided on the status alone. 400 and 200 bodies are
/// parsed, and a parse failure becomes the matching `*Unparsable` error with
/// the parser's message attached.
pub fn decode(
    query: &SearchQuery,
    response: &HttpResponse,
) -> Result<SearchResponse, ClientError> {
    match response.status {
        200 => decode_users(query, &response.body),
        400 => Err(decode_bad_request(query, &response.body)),
        401 => Err(ClientError::BadAccessToken),
        500 => Err(ClientError::ServerFatal),
        status => Err(ClientError::UnknownError { status }),
    }
}

fn decode_bad_request(query: &SearchQuery, body: &[u8]) -> ClientError {
    let payload: ErrorPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return ClientError::BadRequestUnparsable(e.to_string()),
    };

    if payload.error == BAD_ORDER_FIELD {
        ClientError::BadOrderField(query.order_field.clone())
    } else {
        ClientError::UnknownBadRequest(payload.error)
    }
}

fn decode_users(query: &SearchQuery, body: &[u8]) -> Result<SearchResponse, ClientError> {
    let mut users: Vec<User> =
        serde_json::from_slice(body).map_err(|e| ClientError::ResultUnparsable(e.to_string()))?;

    let next_page = users.len() > query.page_size;
    if next_page {
        users.truncate(query.page_size);
    }
    debug!(count = users.len(), next_page, "decoded search page");

    Ok(SearchResponse { users, next_page })
}
