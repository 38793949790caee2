// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SQLite store over the compact dataset file.
//!
//! The connection is opened read-only and guarded by a mutex; each query runs
//! on tokio's blocking pool so a slow join never stalls timers or other
//! fields' event handling. Statements are cached per SQL text, which is why
//! parameters are always bound rather than formatted in.

use super::query::Query;
use super::{QueryDispatcher, Row, Value};
use crate::error::DispatchError;
use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql};
use std::path::Path;
use std::sync::Arc;

/// Read-only handle to a compact dataset database.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open an existing database file read-only.
    pub fn open(path: &Path) -> Result<Self, DispatchError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::info!(path = %path.display(), "opened SQLite dataset");
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-open connection (e.g. an in-memory database in tests).
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run a query on the calling thread.
    pub fn execute(&self, query: &Query) -> Result<Vec<Row>, DispatchError> {
        let conn = self.conn.lock();
        run(&conn, &query.sql(), &query.params())
    }
}

#[async_trait]
impl QueryDispatcher for SqliteStore {
    async fn query(&self, query: &Query) -> Result<Vec<Row>, DispatchError> {
        let store = self.clone();
        let query = query.clone();
        tokio::task::spawn_blocking(move || store.execute(&query))
            .await
            .map_err(|e| DispatchError::Task(e.to_string()))?
    }
}

fn run(conn: &Connection, sql: &str, params: &[Value]) -> Result<Vec<Row>, DispatchError> {
    let mut stmt = conn.prepare_cached(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;

    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let mut row = Row::new();
        for (i, name) in columns.iter().enumerate() {
            let value = match r.get_ref(i)? {
                ValueRef::Null | ValueRef::Blob(_) => Value::Null,
                ValueRef::Integer(n) => Value::Integer(n),
                ValueRef::Real(f) => Value::Real(f),
                ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            };
            row.insert(name.clone(), value);
        }
        out.push(row);
    }
    Ok(out)
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(n) => ToSqlOutput::from(*n),
            Value::Real(f) => ToSqlOutput::from(*f),
            Value::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}
