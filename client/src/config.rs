use std::time::Duration;

/// Default bound on a single search call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Immutable connection settings for a `SearchClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the search endpoint, e.g. `http://127.0.0.1:3000/search`.
    pub base_url: String,
    /// Sent verbatim in the `AccessToken` header.
    pub access_token: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
