//! Request validation and query-string encoding.
//!
//! The client asks the server for one record more than the page size. The
//! extra record is never shown to the caller; it only tells the decoder that
//! another page exists.

use serde::Serialize;
use tracing::debug;

use crate::error::ClientError;
use crate::types::{OrderBy, SearchRequest};

/// Largest page a single call can return.
pub const MAX_PAGE_SIZE: usize = 25;

/// A validated search, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Users the caller will see at most. Never above `MAX_PAGE_SIZE`.
    pub page_size: usize,
    pub offset: usize,
    pub order_by: OrderBy,
    pub order_field: String,
    pub query: String,
}

/// Field order here is the order on the wire.
#[derive(Serialize)]
struct WireParams<'a> {
    limit: usize,
    offset: usize,
    order_by: i8,
    order_field: &'a str,
    query: &'a str,
}

impl SearchQuery {
    /// Form-urlencoded parameters, always in the same order with every key
    /// present.
    pub fn encode(&self) -> String {
        let params = WireParams {
            limit: self.page_size + 1,
            offset: self.offset,
            order_by: self.order_by.code(),
            order_field: &self.order_field,
            query: &self.query,
        };
        serde_html_form::to_string(&params)
            .expect("flat struct of scalars is always form-encodable")
    }
}

/// Validate `req` and normalise it into a `SearchQuery`.
pub fn build_query(req: &SearchRequest) -> Result<SearchQuery, ClientError> {
    if req.limit < 0 {
        return Err(ClientError::InvalidLimit);
    }
    if req.offset < 0 {
        return Err(ClientError::InvalidOffset);
    }

    let requested = usize::try_from(req.limit).map_err(|_| ClientError::InvalidLimit)?;
    let offset = usize::try_from(req.offset).map_err(|_| ClientError::InvalidOffset)?;
    let page_size = requested.min(MAX_PAGE_SIZE);
    if page_size < requested {
        debug!(requested, page_size, "limit clamped to max page size");
    }

    Ok(SearchQuery {
        page_size,
        offset,
        order_by: req.order_by,
        order_field: req.order_field.clone(),
        query: req.query.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_limit_is_rejected() {
        let req = SearchRequest {
            limit: -3,
            ..Default::default()
        };
        assert_eq!(build_query(&req).unwrap_err(), ClientError::InvalidLimit);
    }

    #[test]
    fn negative_offset_is_rejected() {
        let req = SearchRequest {
            offset: -1,
            ..Default::default()
        };
        assert_eq!(build_query(&req).unwrap_err(), ClientError::InvalidOffset);
    }

    #[test]
    fn limit_is_checked_before_offset() {
        let req = SearchRequest {
            limit: -1,
            offset: -1,
            ..Default::default()
        };
        assert_eq!(build_query(&req).unwrap_err(), ClientError::InvalidLimit);
    }

    #[test]
    fn default_request_encodes_minimal_limit() {
        let query = build_query(&SearchRequest::default()).unwrap();
        assert_eq!(query.page_size, 0);
        assert_eq!(query.encode(), "limit=1&offset=0&order_by=0&order_field=&query=");
    }

    #[test]
    fn limit_above_max_is_clamped() {
        let req = SearchRequest {
            limit: 26,
            ..Default::default()
        };
        let query = build_query(&req).unwrap();
        assert_eq!(query.page_size, MAX_PAGE_SIZE);
        assert!(query.encode().starts_with("limit=26&"));
    }

    #[test]
    fn all_parameters_are_encoded_in_order() {
        let req = SearchRequest {
            limit: 10,
            offset: 5,
            query: "Boyd Wolf".to_string(),
            order_field: "Age".to_string(),
            order_by: OrderBy::Desc,
        };
        let query = build_query(&req).unwrap();
        assert_eq!(
            query.encode(),
            "limit=11&offset=5&order_by=-1&order_field=Age&query=Boyd+Wolf"
        );
    }

    #[test]
    fn extreme_values_still_encode() {
        let query = SearchQuery {
            page_size: MAX_PAGE_SIZE,
            offset: usize::MAX,
            order_by: OrderBy::Desc,
            order_field: "\u{0}\n".to_string(),
            query: "ünïcödé 🙂".to_string(),
        };
        let encoded = query.encode();
        assert!(encoded.starts_with(&format!("limit=26&offset={}&order_by=-1&", usize::MAX)));
        assert!(encoded.contains("order_field=%00%0A&query="));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let req = SearchRequest {
            limit: 1,
            query: "a&b=c".to_string(),
            order_by: OrderBy::Asc,
            ..Default::default()
        };
        let query = build_query(&req).unwrap();
        assert_eq!(
            query.encode(),
            "limit=2&offset=0&order_by=1&order_field=&query=a%26b%3Dc"
        );
    }
}
