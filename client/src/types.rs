//! Domain DTOs for the user search API.
//!
//! # Design
//! These types mirror the search server's wire schema but are defined
//! independently. Integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// Sort direction requested from the server.
///
/// Serialized on the wire as an integer code: `-1` descending, `0` as stored,
/// `1` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Desc,
    #[default]
    AsIs,
    Asc,
}

impl OrderBy {
    pub fn code(self) -> i8 {
        match self {
            OrderBy::Desc => -1,
            OrderBy::AsIs => 0,
            OrderBy::Asc => 1,
        }
    }
}

/// Caller input for a single search call.
///
/// `limit` and `offset` are signed so that invalid values can be expressed
/// and rejected locally instead of being silently wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    /// Case-sensitive substring matched against names and biography.
    pub query: String,
    /// `Id`, `Name` or `Age`. Empty sorts by name.
    pub order_field: String,
    pub order_by: OrderBy,
}

/// A single user returned by the search API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// The server holds at least one more matching user past this page.
    pub next_page: bool,
}

/// Body the server sends alongside a 400.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    #[serde(rename = "Error")]
    pub error: String,
}
