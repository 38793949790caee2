// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crossover searches: titles two people share, people two titles share.
//!
//! Each side picks its own path at submission time. A field carrying a bound
//! identifier (the user picked a suggestion) matches by identifier exactly;
//! a free-text field falls back to a case-insensitive substring match on the
//! display text. Mixing the two within one search is normal.
//!
//! # Invariants
//!
//! - Both sides are validated before anything is sent to the store. A side
//!   whose trimmed text is shorter than the minimum rejects the whole
//!   submission with a [`ValidationError`] naming that field.
//! - Self-pairs are excluded by the query itself (`p1 != p2`, `t1 != t2`).

use crate::dispatch::{rows, Predicate, Query, QueryDispatcher, Row};
use crate::error::{Result, ValidationError};
use crate::types::{BoundSelection, CreditedPerson, Title};
use crate::utils::trimmed_len;
use std::sync::Arc;

/// Which crossover a submission asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    /// Two people in, titles out.
    SharedTitles,
    /// Two titles in, people out.
    SharedPeople,
}

impl CrossoverKind {
    /// Names of the two input fields, used in validation messages.
    pub fn fields(self) -> (&'static str, &'static str) {
        match self {
            CrossoverKind::SharedTitles => ("actor1", "actor2"),
            CrossoverKind::SharedPeople => ("film1", "film2"),
        }
    }
}

/// Pick the exact or fuzzy path for one field.
pub fn predicate_for(
    field: &str,
    selection: &BoundSelection,
    min_chars: usize,
) -> std::result::Result<Predicate, ValidationError> {
    let text = selection.display_value.trim();
    if trimmed_len(text) < min_chars {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min_chars,
        });
    }
    Ok(match &selection.stable_id {
        Some(id) => Predicate::IdEquals(id.clone()),
        None => Predicate::TextContains(text.to_string()),
    })
}

/// Validate both sides and build the query.
pub fn build_query(
    kind: CrossoverKind,
    first: &BoundSelection,
    second: &BoundSelection,
    min_chars: usize,
) -> std::result::Result<Query, ValidationError> {
    let (first_field, second_field) = kind.fields();
    let left = predicate_for(first_field, first, min_chars)?;
    let right = predicate_for(second_field, second, min_chars)?;
    Ok(match kind {
        CrossoverKind::SharedTitles => Query::SharedTitles { left, right },
        CrossoverKind::SharedPeople => Query::SharedPeople { left, right },
    })
}

/// Runs crossover searches against one store.
#[derive(Clone)]
pub struct CrossoverSearch {
    dispatcher: Arc<dyn QueryDispatcher>,
    min_chars: usize,
}

impl CrossoverSearch {
    pub fn new(dispatcher: Arc<dyn QueryDispatcher>, min_chars: usize) -> Self {
        Self {
            dispatcher,
            min_chars,
        }
    }

    /// Titles both people are credited on, most recent first.
    pub async fn shared_titles(
        &self,
        first: &BoundSelection,
        second: &BoundSelection,
    ) -> Result<Vec<Title>> {
        let query = build_query(CrossoverKind::SharedTitles, first, second, self.min_chars)?;
        let found = self.run(query).await?;
        Ok(rows::decode_all(&found, rows::title)?)
    }

    /// People credited on both titles, by name.
    pub async fn shared_people(
        &self,
        first: &BoundSelection,
        second: &BoundSelection,
    ) -> Result<Vec<CreditedPerson>> {
        let query = build_query(CrossoverKind::SharedPeople, first, second, self.min_chars)?;
        let found = self.run(query).await?;
        Ok(rows::decode_all(&found, rows::credited_person)?)
    }

    async fn run(&self, query: Query) -> Result<Vec<Row>> {
        if let Query::SharedTitles { left, right } | Query::SharedPeople { left, right } = &query {
            tracing::debug!(
                shape = query.shape(),
                left_exact = left.is_exact(),
                right_exact = right.is_exact(),
                "crossover search"
            );
        }
        let rows = self.dispatcher.query(&query).await?;
        tracing::debug!(shape = query.shape(), results = rows.len(), "crossover done");
        Ok(rows)
    }
}
