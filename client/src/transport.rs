//! The single place that performs network I/O.
//!
//! # Design
//! `Transport` is a trait so the client can be driven by something other
//! than a real socket in tests (for example to count calls). `UreqTransport`
//! is the production implementation. It makes exactly one attempt per call and
//! hands 4xx/5xx responses back as data. Bodies are kept as raw bytes and only
//! read for statuses the decoder parses.

use std::io;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::decode::reads_body;
use crate::http::{HttpRequest, HttpResponse};

/// Network-level outcome that produced no HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Network(String),
}

/// Executes an `HttpRequest` and returns whatever the server answered.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking HTTP transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds the whole call, connect through body read.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(classify)?;

        let status = response.status().as_u16();
        let body = if reads_body(status) {
            response.body_mut().read_to_vec().map_err(classify)?
        } else {
            Vec::new()
        };
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::Io(ref e) if e.kind() == io::ErrorKind::TimedOut => TransportError::Timeout,
        other => TransportError::Network(other.to_string()),
    }
}
