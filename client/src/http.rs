//! HTTP transport types.
//!
//! # Design
//! Requests and responses are plain data. `SearchClient` builds an
//! `HttpRequest`, a `Transport` executes it, and the decoder consumes the
//! resulting `HttpResponse`. Only the transport touches the network, so the
//! build and decode steps stay deterministic and easy to test.

/// Header carrying the shared access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// A `GET` request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Full URL including the encoded query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Non-2xx statuses are carried here as well; interpreting them is the
/// decoder's job. The body is raw bytes and stays empty for statuses whose
/// body the decoder never looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
