//! HTTP search server over a fixed, read-only user set.
//!
//! `GET /search` takes `limit`, `offset`, `order_by`, `order_field` and
//! `query` as URL parameters and answers with a JSON array of users. Every
//! request must carry the shared token in the `AccessToken` header.

pub mod auth;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

pub use config::ServerConfig;
pub use dataset::{Dataset, DatasetError, Record, User};
pub use engine::{OrderBy, OrderField, SearchParams, Sort};
pub use error::{ErrorPayload, SearchError, BAD_ORDER_FIELD};

/// Shared, read-only state handed to every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dataset: Dataset,
    pub access_token: Arc<str>,
    pub max_limit: usize,
}

impl AppState {
    pub fn new(dataset: Dataset, access_token: &str, max_limit: usize) -> Self {
        Self {
            dataset,
            access_token: Arc::from(access_token),
            max_limit,
        }
    }
}

/// Query parameters exactly as received. Parsed leniently into
/// `SearchParams` so that malformed numbers never produce a rejection.
#[derive(Debug, Default)]
pub struct RawSearchParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_by: Option<String>,
    pub order_field: Option<String>,
    pub query: Option<String>,
}

fn parse_count(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok()).unwrap_or(0)
}

impl RawSearchParams {
    /// Collect known keys from decoded query pairs. The first occurrence of a
    /// key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut raw.limit,
                "offset" => &mut raw.offset,
                "order_by" => &mut raw.order_by,
                "order_field" => &mut raw.order_field,
                "query" => &mut raw.query,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        raw
    }

    /// A zero or missing limit means "as many as allowed"; any limit is
    /// capped at `max_limit`.
    pub fn into_params(self, max_limit: usize) -> Result<SearchParams, SearchError> {
        let order_by = OrderBy::parse_lenient(self.order_by.as_deref().unwrap_or_default());
        let sort = Sort::resolve(order_by, self.order_field.as_deref().unwrap_or_default())?;

        let limit = match parse_count(self.limit.as_deref()) {
            0 => max_limit,
            n => n.min(max_limit),
        };

        Ok(SearchParams {
            query: self.query.unwrap_or_default(),
            sort,
            limit,
            offset: parse_count(self.offset.as_deref()),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_users))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_access_token,
        ))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn search_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, SearchError> {
    let raw = RawSearchParams::from_pairs(pairs);
    let params = raw.into_params(state.max_limit).inspect_err(|e| {
        info!("rejected search: {e}");
    })?;

    let users = engine::search(state.dataset.rows(), &params);
    debug!(?params, found = users.len(), "search served");

    let body = serde_json::to_vec(&users).map_err(|e| SearchError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
