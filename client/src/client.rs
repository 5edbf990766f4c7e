//! Search client facade.
//!
//! # Design
//! `SearchClient` holds its configuration and a transport, nothing else, and
//! keeps no state between calls. `find_users` is split into three steps that
//! can also be driven separately:
//! - `build_find_users` validates the request and produces an `HttpRequest`;
//! - the `Transport` executes it;
//! - `parse_find_users` turns the `HttpResponse` into users or a `ClientError`.

use tracing::debug;

use crate::config::ClientConfig;
use crate::decode::decode;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, ACCESS_TOKEN_HEADER};
use crate::query::{build_query, SearchQuery};
use crate::transport::{Transport, TransportError, UreqTransport};
use crate::types::{SearchRequest, SearchResponse};

/// Blocking client for the user search API.
#[derive(Debug, Clone)]
pub struct SearchClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl SearchClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Validate `req` and describe the HTTP call that would serve it.
    ///
    /// Invalid limits or offsets fail here, before anything is sent.
    pub fn build_find_users(
        &self,
        req: &SearchRequest,
    ) -> Result<(SearchQuery, HttpRequest), ClientError> {
        let query = build_query(req)?;
        let request = HttpRequest {
            url: format!("{}?{}", self.config.base_url, query.encode()),
            headers: vec![(
                ACCESS_TOKEN_HEADER.to_string(),
                self.config.access_token.clone(),
            )],
        };
        Ok((query, request))
    }

    pub fn parse_find_users(
        &self,
        query: &SearchQuery,
        response: &HttpResponse,
    ) -> Result<SearchResponse, ClientError> {
        decode(query, response)
    }

    /// Run one search round-trip. Never retries.
    pub fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let (query, request) = self.build_find_users(req)?;
        debug!(url = %request.url, "searching users");

        let response = self.transport.execute(&request).map_err(|e| match e {
            TransportError::Timeout => ClientError::Timeout {
                query: query.encode(),
            },
            TransportError::Network(msg) => ClientError::NetworkFailure(msg),
        })?;

        self.parse_find_users(&query, &response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::types::OrderBy;

    /// Replays a canned outcome and counts how often it was asked.
    struct ScriptedTransport {
        outcome: Result<HttpResponse, TransportError>,
        calls: Cell<usize>,
        last: RefCell<Option<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn new(outcome: Result<HttpResponse, TransportError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn ok(status: u16, body: &str) -> Self {
            Self::new(Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }))
        }
    }

    impl Transport for &ScriptedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            self.outcome.clone()
        }
    }

    fn client(transport: &ScriptedTransport) -> SearchClient<&ScriptedTransport> {
        SearchClient::with_transport(
            ClientConfig::new("http://localhost:3000/search", "abc-def"),
            transport,
        )
    }

    #[test]
    fn build_find_users_produces_correct_request() {
        let transport = ScriptedTransport::ok(200, "[]");
        let (query, req) = client(&transport)
            .build_find_users(&SearchRequest::default())
            .unwrap();
        assert_eq!(query.page_size, 0);
        assert_eq!(
            req.url,
            "http://localhost:3000/search?limit=1&offset=0&order_by=0&order_field=&query="
        );
        assert_eq!(req.header("accesstoken"), Some("abc-def"));
    }

    #[test]
    fn invalid_limit_never_reaches_transport() {
        let transport = ScriptedTransport::ok(200, "[]");
        let req = SearchRequest {
            limit: -3,
            ..Default::default()
        };
        let err = client(&transport).find_users(&req).unwrap_err();
        assert_eq!(err.to_string(), "limit must be > 0");
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn invalid_offset_never_reaches_transport() {
        let transport = ScriptedTransport::ok(200, "[]");
        let req = SearchRequest {
            offset: -3,
            ..Default::default()
        };
        let err = client(&transport).find_users(&req).unwrap_err();
        assert_eq!(err.to_string(), "offset must be > 0");
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn valid_request_is_sent_exactly_once() {
        let transport = ScriptedTransport::ok(500, "");
        let err = client(&transport)
            .find_users(&SearchRequest::default())
            .unwrap_err();
        assert_eq!(err, ClientError::ServerFatal);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn timeout_reports_query_in_flight() {
        let transport = ScriptedTransport::new(Err(TransportError::Timeout));
        let err = client(&transport)
            .find_users(&SearchRequest::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "timeout for limit=1&offset=0&order_by=0&order_field=&query="
        );
    }

    #[test]
    fn network_failure_message_is_kept_verbatim() {
        let transport = ScriptedTransport::new(Err(TransportError::Network(
            "connection refused".to_string(),
        )));
        let err = client(&transport)
            .find_users(&SearchRequest::default())
            .unwrap_err();
        assert_eq!(err, ClientError::NetworkFailure("connection refused".to_string()));
        assert_eq!(err.to_string(), "unknown error connection refused");
    }

    #[test]
    fn bad_order_field_uses_requested_field() {
        let transport = ScriptedTransport::ok(400, r#"{"Error":"ErrorBadOrderField"}"#);
        let req = SearchRequest {
            order_by: OrderBy::Asc,
            order_field: "invalid".to_string(),
            ..Default::default()
        };
        let err = client(&transport).find_users(&req).unwrap_err();
        assert_eq!(err.to_string(), "OrderField invalid invalid");
        let sent = transport.last.borrow().clone().unwrap();
        assert!(sent.url.contains("order_by=1&order_field=invalid"));
    }
}
