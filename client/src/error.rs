//! Error types for the search client.
//!
//! # Design
//! Every failure a caller can observe is one of these variants. Transport and
//! JSON errors are folded in with a fixed prefix and their original message,
//! so nothing from `ureq` or `serde_json` leaks through undecorated.

use thiserror::Error;

/// Errors returned by `SearchClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before any network call.
    #[error("limit must be > 0")]
    InvalidLimit,

    /// Rejected before any network call.
    #[error("offset must be > 0")]
    InvalidOffset,

    /// The server returned 401.
    #[error("Bad AccessToken")]
    BadAccessToken,

    /// The server rejected the requested sort field.
    #[error("OrderField {0} invalid")]
    BadOrderField(String),

    /// A 400 carrying a reason the client does not recognise.
    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    /// A 400 whose body is not a valid error payload.
    #[error("cant unpack error json: {0}")]
    BadRequestUnparsable(String),

    /// A 200 whose body is not a valid list of users.
    #[error("cant unpack result json: {0}")]
    ResultUnparsable(String),

    /// The server returned 500.
    #[error("SearchServer fatal error")]
    ServerFatal,

    /// No response within the configured timeout. Carries the query string
    /// that was in flight.
    #[error("timeout for {query}")]
    Timeout { query: String },

    /// DNS, connection or URL failure, message passed through verbatim.
    #[error("unknown error {0}")]
    NetworkFailure(String),

    /// Any status other than 200, 400, 401 or 500.
    #[error("unexpected status code {status}")]
    UnknownError { status: u16 },
}
