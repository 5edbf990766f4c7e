//! Typed blocking client for the user search service.
//!
//! # Overview
//! Validates a `SearchRequest`, sends it as a `GET` with the shared access
//! token, and classifies whatever comes back into a `SearchResponse` or one
//! of the `ClientError` variants.
//!
//! # Design
//! - `SearchClient` holds an immutable `ClientConfig` and a `Transport`.
//! - Request building (`query`) and response decoding (`decode`) are pure and
//!   work on plain `HttpRequest` / `HttpResponse` data.
//! - Only `transport` performs I/O. One attempt per call, bounded by the
//!   configured timeout.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpRequest, HttpResponse};
pub use query::{SearchQuery, MAX_PAGE_SIZE};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{OrderBy, SearchRequest, SearchResponse, User};
