// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data-store boundary.
//!
//! Everything above this module talks to the dataset through one trait,
//! [`QueryDispatcher`], handed out as an `Arc<dyn QueryDispatcher>`. A
//! [`Query`] knows its own SQL text and bound parameters; SQL-backed stores run
//! those verbatim, the in-memory store answers the same shapes directly.
//!
//! Stores are read-only and must tolerate arbitrarily interleaved queries from
//! independent callers (every autocomplete field plus the crossover forms).

pub mod memory;
pub mod query;
pub mod rows;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use crate::error::DispatchError;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

pub use memory::MemoryStore;
pub use query::{like_pattern, Predicate, Query};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// A single column value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Option<i64>> for Value {
    fn from(n: Option<i64>) -> Self {
        n.map_or(Value::Null, Value::Integer)
    }
}

/// One result row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.0.insert(column.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, column: String, value: Value) {
        self.0.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Required text column.
    pub fn text(&self, column: &str) -> Result<&str, DispatchError> {
        match self.0.get(column) {
            Some(Value::Text(s)) => Ok(s),
            other => Err(DispatchError::Row(format!(
                "expected text in `{}`, found {:?}",
                column, other
            ))),
        }
    }

    /// Required integer column.
    pub fn integer(&self, column: &str) -> Result<i64, DispatchError> {
        match self.0.get(column) {
            Some(Value::Integer(n)) => Ok(*n),
            other => Err(DispatchError::Row(format!(
                "expected integer in `{}`, found {:?}",
                column, other
            ))),
        }
    }

    /// Nullable integer column. A missing column reads as NULL.
    pub fn opt_integer(&self, column: &str) -> Result<Option<i64>, DispatchError> {
        match self.0.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Integer(n)) => Ok(Some(*n)),
            Some(other) => Err(DispatchError::Row(format!(
                "expected integer or NULL in `{}`, found {:?}",
                column, other
            ))),
        }
    }
}

/// Runs read-only queries against the dataset.
#[async_trait]
pub trait QueryDispatcher: Send + Sync {
    async fn query(&self, query: &Query) -> Result<Vec<Row>, DispatchError>;
}

/// Open a dataset file: `.json` loads into memory, anything else is SQLite.
pub fn open(path: &Path) -> crate::error::Result<Arc<dyn QueryDispatcher>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return Ok(Arc::new(MemoryStore::load(path)?));
    }
    open_sqlite(path)
}

#[cfg(feature = "sqlite")]
fn open_sqlite(path: &Path) -> crate::error::Result<Arc<dyn QueryDispatcher>> {
    Ok(Arc::new(SqliteStore::open(path)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(path: &Path) -> crate::error::Result<Arc<dyn QueryDispatcher>> {
    Err(crate::error::CostarError::Config(format!(
        "{}: SQLite support is not compiled in",
        path.display()
    )))
}
