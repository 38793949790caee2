// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion ranking: score, filter, sort, truncate.
//!
//! The sort is stable and keyed on score alone. Ties keep the order the
//! dispatcher returned, so callers pre-order candidates (people by name,
//! titles by most recent premiere) to make ties deterministic.

use super::core::score;
use crate::types::{Candidate, ScoredCandidate};
use std::cmp::Ordering;

/// How many suggestions a list shows.
pub const DEFAULT_DISPLAY_LIMIT: usize = 8;

/// Compare two scored candidates for ranking: higher score first.
///
/// Scores are finite by construction, so `partial_cmp` only returns `None`
/// for NaN, which is treated as equal to keep the sort total.
pub fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Score every candidate's display text, drop non-matches, sort, truncate.
pub fn rank_scored(candidates: &[Candidate], query: &str, limit: usize) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|candidate| {
            let s = score(&candidate.display_text, query);
            (s > 0.0).then(|| ScoredCandidate {
                candidate: candidate.clone(),
                score: s,
            })
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep dispatcher order.
    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}

/// Ranked candidates without their scores.
pub fn rank(candidates: &[Candidate], query: &str, limit: usize) -> Vec<Candidate> {
    rank_scored(candidates, query, limit)
        .into_iter()
        .map(|s| s.candidate)
        .collect()
}
