// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The compact dataset schema and the importer that writes it.
//!
//! Three `WITHOUT ROWID` tables keyed by IMDb-style text ids. Large pages
//! keep the file friendly to chunked HTTP range reads when it's served
//! statically. `import` is the only write path in the crate and only ever
//! targets a fresh file.

use crate::error::{CostarError, DispatchError, Result};
use crate::types::{Dataset, DatasetStats};
use rusqlite::{params, Connection};
use std::path::Path;
use tempfile::NamedTempFile;

/// Table definitions.
pub const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS titles (
        title_id TEXT PRIMARY KEY,
        original_title TEXT NOT NULL,
        type INTEGER NOT NULL CHECK(type IN (1, 2, 3)),
        premiered INTEGER
    ) WITHOUT ROWID;

    CREATE TABLE IF NOT EXISTS people (
        person_id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    ) WITHOUT ROWID;

    CREATE TABLE IF NOT EXISTS crew (
        title_id TEXT NOT NULL,
        person_id TEXT NOT NULL,
        category TEXT NOT NULL,
        PRIMARY KEY (title_id, person_id, category),
        FOREIGN KEY (title_id) REFERENCES titles(title_id),
        FOREIGN KEY (person_id) REFERENCES people(person_id)
    ) WITHOUT ROWID;
";

/// Secondary indexes, created after bulk insert.
pub const INDEXES_SQL: &str = "
    CREATE INDEX IF NOT EXISTS idx_titles_type ON titles(type);
    CREATE INDEX IF NOT EXISTS idx_titles_premiered ON titles(premiered);
    CREATE INDEX IF NOT EXISTS idx_crew_title_id ON crew(title_id);
    CREATE INDEX IF NOT EXISTS idx_crew_person_id ON crew(person_id);
    CREATE INDEX IF NOT EXISTS idx_people_name ON people(name);
";

/// Page size for files meant to be served over HTTP range requests.
pub const PAGE_SIZE: u32 = 32 * 1024;

/// Create the schema and insert every row in one transaction.
///
/// Duplicate credits are skipped; the returned counts are what the file
/// holds, not what the dataset listed.
pub fn write_dataset(conn: &mut Connection, dataset: &Dataset) -> std::result::Result<DatasetStats, DispatchError> {
    conn.execute_batch(SCHEMA_SQL)?;

    let tx = conn.transaction()?;
    {
        let mut insert_title = tx.prepare(
            "INSERT INTO titles (title_id, original_title, type, premiered) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for t in &dataset.titles {
            insert_title.execute(params![
                t.title_id,
                t.original_title,
                t.title_type.code(),
                t.premiered
            ])?;
        }

        let mut insert_person = tx.prepare("INSERT INTO people (person_id, name) VALUES (?1, ?2)")?;
        for p in &dataset.people {
            insert_person.execute(params![p.person_id, p.name])?;
        }

        let mut insert_credit = tx.prepare(
            "INSERT OR IGNORE INTO crew (title_id, person_id, category) VALUES (?1, ?2, ?3)",
        )?;
        for c in &dataset.crew {
            insert_credit.execute(params![c.title_id, c.person_id, c.category])?;
        }
    }
    let stats = count_rows(&tx)?;
    tx.commit()?;

    conn.execute_batch(INDEXES_SQL)?;
    Ok(stats)
}

fn count_rows(conn: &Connection) -> std::result::Result<DatasetStats, DispatchError> {
    let count = |table: &str| -> std::result::Result<u64, DispatchError> {
        let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
        Ok(u64::try_from(n).unwrap_or(0))
    };
    Ok(DatasetStats {
        titles: count("titles")?,
        people: count("people")?,
        credits: count("crew")?,
    })
}

/// Write `dataset` to a new SQLite file at `target`.
///
/// The file is built under a temporary name in the same directory and only
/// renamed onto `target` once complete, so a failed import leaves nothing
/// behind. Refuses to overwrite an existing file.
pub fn import(dataset: &Dataset, target: &Path) -> Result<DatasetStats> {
    if target.exists() {
        return Err(CostarError::Config(format!(
            "{} already exists; remove it first",
            target.display()
        )));
    }

    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let staging = NamedTempFile::new_in(dir)?;

    tracing::info!(
        target = %target.display(),
        titles = dataset.titles.len(),
        people = dataset.people.len(),
        credits = dataset.crew.len(),
        "importing dataset"
    );
    let stats = {
        let mut conn = Connection::open(staging.path()).map_err(DispatchError::from)?;
        conn.execute_batch(&format!(
            "PRAGMA page_size = {}; PRAGMA journal_mode = DELETE;",
            PAGE_SIZE
        ))
        .map_err(DispatchError::from)?;
        let stats = write_dataset(&mut conn, dataset)?;
        conn.execute_batch("VACUUM;").map_err(DispatchError::from)?;
        stats
    };

    staging.persist_noclobber(target).map_err(|e| e.error)?;
    tracing::info!(
        target = %target.display(),
        credits = stats.credits,
        "import complete"
    );
    Ok(stats)
}
