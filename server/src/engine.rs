//! Filter, sort and paginate the dataset for a single search.
//!
//! Everything here is a pure function of its inputs. The rows are only read;
//! results are owned copies.

use std::cmp::Ordering;

use crate::dataset::{Row, User};
use crate::error::SearchError;

/// Fields a client may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Name,
    Age,
}

impl OrderField {
    /// Resolve a wire name. Empty means `Name`.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        match raw {
            "Id" => Ok(OrderField::Id),
            "Name" | "" => Ok(OrderField::Name),
            "Age" => Ok(OrderField::Age),
            other => Err(SearchError::BadOrderField(other.to_string())),
        }
    }

    pub fn compare(self, lhs: &User, rhs: &User) -> Ordering {
        match self {
            OrderField::Id => lhs.id.cmp(&rhs.id),
            OrderField::Name => lhs.name.cmp(&rhs.name),
            OrderField::Age => lhs.age.cmp(&rhs.age),
        }
    }
}

/// Requested order, as carried by the `order_by` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Desc,
    #[default]
    AsIs,
    Asc,
}

impl OrderBy {
    /// `-1` descending, `1` ascending. Anything else, including text that is
    /// not a number, leaves the rows unsorted.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(-1) => OrderBy::Desc,
            Ok(1) => OrderBy::Asc,
            _ => OrderBy::AsIs,
        }
    }
}

/// Resolved sort: either none, or a field with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    AsIs,
    Asc(OrderField),
    Desc(OrderField),
}

impl Sort {
    /// The field is only inspected when a sort is actually requested.
    pub fn resolve(order_by: OrderBy, order_field: &str) -> Result<Self, SearchError> {
        match order_by {
            OrderBy::AsIs => Ok(Sort::AsIs),
            OrderBy::Asc => Ok(Sort::Asc(OrderField::parse(order_field)?)),
            OrderBy::Desc => Ok(Sort::Desc(OrderField::parse(order_field)?)),
        }
    }
}

/// Validated input for `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub sort: Sort,
    pub limit: usize,
    pub offset: usize,
}

fn matches(row: &Row, query: &str) -> bool {
    query.is_empty()
        || row.user.about.contains(query)
        || row.first_name.contains(query)
        || row.last_name.contains(query)
}

/// Run one search over `rows`.
///
/// Sorting is stable in both directions: rows with equal keys keep their
/// storage order. An offset past the end yields an empty page.
pub fn search(rows: &[Row], params: &SearchParams) -> Vec<User> {
    let mut found: Vec<&User> = rows
        .iter()
        .filter(|row| matches(row, &params.query))
        .map(|row| &row.user)
        .collect();

    match params.sort {
        Sort::AsIs => {}
        Sort::Asc(field) => found.sort_by(|a, b| field.compare(a, b)),
        Sort::Desc(field) => found.sort_by(|a, b| field.compare(b, a)),
    }

    found
        .into_iter()
        .skip(params.offset)
        .take(params.limit)
        .cloned()
        .collect()
}
