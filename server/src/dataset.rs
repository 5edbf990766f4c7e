//! Loading the fixed user set the server searches over.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stored row, as it appears in the dataset file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

/// Public view of a record, as sent to clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

/// A record with its public view precomputed. Name parts are kept for
/// filtering.
#[derive(Clone, Debug)]
pub struct Row {
    pub first_name: String,
    pub last_name: String,
    pub user: User,
}

impl From<Record> for Row {
    fn from(record: Record) -> Self {
        let name = format!("{} {}", record.first_name, record.last_name);
        Self {
            user: User {
                id: record.id,
                name,
                age: record.age,
                about: record.about,
                gender: record.gender,
            },
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, cheaply clonable set of rows shared by every request.
#[derive(Clone, Debug)]
pub struct Dataset {
    rows: Arc<[Row]>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            rows: records.into_iter().map(Row::from).collect(),
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
