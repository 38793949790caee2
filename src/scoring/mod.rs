// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! The key insight is that the match tier (exact, prefix, word start, substring,
//! subsequence) dominates everything else. A prefix match on a long title beats
//! a substring match at position 1. The scoring constants keep the tier bands
//! apart.

mod core;
pub mod ranking;

pub use self::core::*;
