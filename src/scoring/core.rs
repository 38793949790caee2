// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion ranking.
//!
//! Match tier dominates position. The worst prefix match still beats the best
//! word-start match, which beats the best substring match, which beats the best
//! subsequence match. Within a tier, shorter candidates and earlier positions win.
//!
//! # Key Invariant: Tier Dominance
//!
//! Tier bands never overlap:
//!
//! ```text
//! Exact        1000
//! Prefix       (800, 900]   900 - min(len, 99)
//! WordPrefix   (600, 700]   700 - min(word_index, 99)
//! Substring    (400, 500]   500 - min(position, 99)
//! Subsequence  (0, 300]     300 * streak_points / max_points
//! ```
//!
//! The position penalty is capped at 99 so a very long candidate can never fall
//! into the band below it.

use crate::utils::{char_offset, fold_case};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 1000.0;

/// Ceiling of the prefix band; reduced by candidate length.
pub const PREFIX_BASE_SCORE: f64 = 900.0;

/// Ceiling of the word-start band; reduced by word index.
pub const WORD_PREFIX_BASE_SCORE: f64 = 700.0;

/// Ceiling of the substring band; reduced by match position.
pub const SUBSTRING_BASE_SCORE: f64 = 500.0;

/// Ceiling of the subsequence band, reached only by an unbroken streak.
pub const SUBSEQUENCE_MAX_SCORE: f64 = 300.0;

/// Largest penalty a length or position can subtract inside a band.
pub const MAX_POSITION_PENALTY: usize = 99;

/// Points for a subsequence character that directly follows the previous match.
pub const STREAK_POINTS: u32 = 3;

/// Points for a subsequence character found after a gap.
pub const GAP_POINTS: u32 = 1;

/// Which rule produced a score. Smaller variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Prefix,
    WordPrefix,
    Substring,
    Subsequence,
    NoMatch,
}

impl MatchTier {
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::WordPrefix => "word-prefix",
            MatchTier::Substring => "substring",
            MatchTier::Subsequence => "subsequence",
            MatchTier::NoMatch => "no match",
        }
    }
}

/// Score `candidate` against `query`. Zero means "exclude".
///
/// Comparison is case-insensitive. An empty query carries no ranking signal and
/// scores zero; callers are expected to enforce their minimum length first.
pub fn score(candidate: &str, query: &str) -> f64 {
    classify(candidate, query).1
}

/// Score and report the tier that produced it.
pub fn classify(candidate: &str, query: &str) -> (MatchTier, f64) {
    if query.is_empty() {
        return (MatchTier::NoMatch, 0.0);
    }

    let text = fold_case(candidate);
    let needle = fold_case(query);

    if text == needle {
        return (MatchTier::Exact, EXACT_SCORE);
    }

    if text.starts_with(&needle) {
        let len = text.chars().count();
        return (MatchTier::Prefix, PREFIX_BASE_SCORE - penalty(len));
    }

    if let Some(word_index) = word_prefix_index(&text, &needle) {
        return (
            MatchTier::WordPrefix,
            WORD_PREFIX_BASE_SCORE - penalty(word_index),
        );
    }

    if let Some(byte_pos) = text.find(&needle) {
        let pos = char_offset(&text, byte_pos);
        return (MatchTier::Substring, SUBSTRING_BASE_SCORE - penalty(pos));
    }

    match subsequence_score(&text, &needle) {
        Some(s) => (MatchTier::Subsequence, s),
        None => (MatchTier::NoMatch, 0.0),
    }
}

fn penalty(n: usize) -> f64 {
    n.min(MAX_POSITION_PENALTY) as f64
}

/// Index of the first whitespace-delimited word at which `needle` starts.
///
/// Checks the text from each word start rather than the word alone, so a
/// multi-word query like "hanks tom" can still match "Ted Hanks Tomlin".
fn word_prefix_index(text: &str, needle: &str) -> Option<usize> {
    let mut word_index = 0;
    let mut at_boundary = true;
    for (byte_pos, c) in text.char_indices() {
        if c.is_whitespace() {
            at_boundary = true;
            continue;
        }
        if at_boundary {
            if text[byte_pos..].starts_with(needle) {
                return Some(word_index);
            }
            word_index += 1;
            at_boundary = false;
        }
    }
    None
}

/// Greedy in-order subsequence match.
///
/// Each query char is located at the first position strictly after the
/// previous match. Returns `None` if any char is missing. Consecutive matches
/// earn `STREAK_POINTS`, gapped ones `GAP_POINTS`, and the total is scaled so an
/// unbroken streak would hit `SUBSEQUENCE_MAX_SCORE`.
fn subsequence_score(text: &str, needle: &str) -> Option<f64> {
    let hay: Vec<char> = text.chars().collect();
    let query: Vec<char> = needle.chars().collect();

    let mut points: u32 = 0;
    let mut next = 0usize;
    let mut prev: Option<usize> = None;

    for &qc in &query {
        let found = hay.get(next..)?.iter().position(|&c| c == qc)?;
        let idx = next + found;
        points += match prev {
            Some(p) if p + 1 == idx => STREAK_POINTS,
            _ => GAP_POINTS,
        };
        prev = Some(idx);
        next = idx + 1;
    }

    let max_points = GAP_POINTS + STREAK_POINTS * (query.len() as u32 - 1);
    Some(SUBSEQUENCE_MAX_SCORE * f64::from(points) / f64::from(max_points))
}
