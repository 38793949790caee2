// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a lookup: candidates, identifiers, dataset rows.
//!
//! Everything the scorer, ranker and controller pass around is defined here.
//! Dataset rows mirror the compact schema (`titles`, `people`, `crew`), while
//! `Candidate` is the shape-agnostic view the autocomplete works with.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Candidate**: immutable once the dispatcher returns it. Ranking reorders
//!   candidates, it never edits them.
//!
//! - **BoundSelection**: `stable_id` is only ever `Some` when `display_value` was
//!   written by the same selection. Free typing clears the id, never the text.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Dataset-assigned key that tells apart entities with identical display text.
///
/// IMDb-style keys (`nm0000158`, `tt0108160`) are text; synthetic datasets may
/// use integers. Both compare by value and render without decoration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StableId {
    Number(i64),
    Text(String),
}

impl StableId {
    /// Text form, used when binding the id as a query parameter.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StableId::Number(n) => write!(f, "{}", n),
            StableId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StableId {
    fn from(id: &str) -> Self {
        StableId::Text(id.to_string())
    }
}

impl From<String> for StableId {
    fn from(id: String) -> Self {
        StableId::Text(id)
    }
}

impl From<i64> for StableId {
    fn from(id: i64) -> Self {
        StableId::Number(id)
    }
}

// =============================================================================
// TITLE TYPES
// =============================================================================

/// Kind of title, stored as a small integer in the compact schema.
///
/// | Stored | Variant        | Label            |
/// |--------|----------------|------------------|
/// | 1      | `Movie`        | "Movie"          |
/// | 2      | `TvSeries`     | "TV Series"      |
/// | 3      | `TvMiniSeries` | "TV Mini-Series" |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleType {
    Movie,
    TvSeries,
    TvMiniSeries,
}

impl TitleType {
    /// Decode the stored integer. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TitleType::Movie),
            2 => Some(TitleType::TvSeries),
            3 => Some(TitleType::TvMiniSeries),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            TitleType::Movie => 1,
            TitleType::TvSeries => 2,
            TitleType::TvMiniSeries => 3,
        }
    }

    /// Human label shown next to suggestions and results.
    pub fn label(self) -> &'static str {
        match self {
            TitleType::Movie => "Movie",
            TitleType::TvSeries => "TV Series",
            TitleType::TvMiniSeries => "TV Mini-Series",
        }
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// Optional metadata carried alongside a candidate for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_type: Option<TitleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A row eligible for suggestion: what the user sees plus the key behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub display_text: String,
    pub stable_id: StableId,
    #[serde(default)]
    pub meta: CandidateMeta,
}

impl Candidate {
    pub fn new(display_text: impl Into<String>, stable_id: impl Into<StableId>) -> Self {
        Self {
            display_text: display_text.into(),
            stable_id: stable_id.into(),
            meta: CandidateMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: CandidateMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// A candidate with its score for one ranking pass. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

// =============================================================================
// HOST FIELD BINDING
// =============================================================================

/// Visible text of a host field plus the identifier of the selection that
/// produced it, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundSelection {
    pub display_value: String,
    #[serde(default)]
    pub stable_id: Option<StableId>,
}

impl BoundSelection {
    /// Free text with no selection behind it.
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            display_value: text.into(),
            stable_id: None,
        }
    }

    /// Text produced by selecting a candidate.
    pub fn selected(text: impl Into<String>, id: impl Into<StableId>) -> Self {
        Self {
            display_value: text.into(),
            stable_id: Some(id.into()),
        }
    }
}

// =============================================================================
// DATASET ROWS
// =============================================================================

/// A row of `titles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub title_id: String,
    pub original_title: String,
    pub title_type: TitleType,
    #[serde(default)]
    pub premiered: Option<i32>,
}

/// A row of `people`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
    pub name: String,
}

/// A row of `crew`: one person credited on one title in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    pub title_id: String,
    pub person_id: String,
    pub category: String,
}

/// A person found by a shared-people search, with the category they were
/// credited under on the first title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditedPerson {
    pub person_id: String,
    pub name: String,
    pub category: String,
}

/// The whole read-only dataset, as loaded from a JSON export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub titles: Vec<Title>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub crew: Vec<Credit>,
}

/// Row counts reported by the `stats` query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub titles: u64,
    pub people: u64,
    pub credits: u64,
}
