// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two kinds matter to the user-facing flow. `ValidationError` is reported
//! inline and stops a submission before any query is issued. `DispatchError`
//! is a store failure; the autocomplete contains it per field, the crossover
//! search returns it. "No results" is never an error.

use thiserror::Error;

/// Input rejected before any query is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed input shorter than the field's minimum.
    #[error("{field}: enter at least {min_chars} characters")]
    TooShort { field: String, min_chars: usize },
}

/// The data store failed to answer a query.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// SQLite reported an error.
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A row was missing a column or had the wrong type.
    #[error("Malformed row: {0}")]
    Row(String),

    /// The blocking query task panicked or was cancelled.
    #[error("Query task failed: {0}")]
    Task(String),

    /// The store can't answer this kind of query.
    #[error("Unsupported query: {0}")]
    Unsupported(String),
}

/// Crate-level error for loading data, configuration and running searches.
#[derive(Error, Debug)]
pub enum CostarError {
    /// Configuration file or override is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for costar operations.
pub type Result<T> = std::result::Result<T, CostarError>;
