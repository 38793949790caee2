// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row decoding: store rows into typed values.
//!
//! Column names follow the compact schema. Both stores produce the same
//! columns for the same query shape, so these decoders serve either.

use super::Row;
use crate::error::DispatchError;
use crate::types::{
    Candidate, CandidateMeta, CreditedPerson, DatasetStats, Title, TitleType,
};

/// `people_by_name` row → candidate.
pub fn person_candidate(row: &Row) -> Result<Candidate, DispatchError> {
    Ok(Candidate::new(row.text("name")?, row.text("person_id")?))
}

/// `titles_by_title` row → candidate with year and type.
pub fn title_candidate(row: &Row) -> Result<Candidate, DispatchError> {
    let meta = CandidateMeta {
        year: row.opt_integer("premiered")?.map(|y| y as i32),
        title_type: TitleType::from_code(row.integer("type")?),
        category: None,
    };
    Ok(Candidate::new(row.text("original_title")?, row.text("title_id")?).with_meta(meta))
}

/// `shared_titles` row → title.
pub fn title(row: &Row) -> Result<Title, DispatchError> {
    let code = row.integer("type")?;
    let title_type = TitleType::from_code(code)
        .ok_or_else(|| DispatchError::Row(format!("unknown title type {}", code)))?;
    Ok(Title {
        title_id: row.text("title_id")?.to_string(),
        original_title: row.text("original_title")?.to_string(),
        title_type,
        premiered: row.opt_integer("premiered")?.map(|y| y as i32),
    })
}

/// `shared_people` row → credited person.
pub fn credited_person(row: &Row) -> Result<CreditedPerson, DispatchError> {
    Ok(CreditedPerson {
        person_id: row.text("person_id")?.to_string(),
        name: row.text("name")?.to_string(),
        category: row.text("category")?.to_string(),
    })
}

/// `stats` row → counts.
pub fn stats(row: &Row) -> Result<DatasetStats, DispatchError> {
    let count = |column: &str| -> Result<u64, DispatchError> {
        u64::try_from(row.integer(column)?)
            .map_err(|_| DispatchError::Row(format!("negative count in `{}`", column)))
    };
    Ok(DatasetStats {
        titles: count("titles")?,
        people: count("people")?,
        credits: count("credits")?,
    })
}

/// Decode every row, failing on the first malformed one.
pub fn decode_all<T>(
    rows: &[Row],
    decode: impl Fn(&Row) -> Result<T, DispatchError>,
) -> Result<Vec<T>, DispatchError> {
    rows.iter().map(decode).collect()
}
