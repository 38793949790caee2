// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, bounded and deterministic, and the tier reported
//! by `classify` must agree with the number `score` returns.

#![no_main]

use costar::{classify, score, MatchTier};
use costar::scoring::EXACT_SCORE;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    candidate: String,
    query: String,
}

fuzz_target!(|input: Input| {
    // Cap lengths; the subsequence walk is linear but the fuzzer is patient.
    let candidate: String = input.candidate.chars().take(200).collect();
    let query: String = input.query.chars().take(50).collect();

    let first = score(&candidate, &query);
    let second = score(&candidate, &query);

    // INVARIANT 1: Deterministic
    assert_eq!(first.to_bits(), second.to_bits(), "score changed between calls");

    // INVARIANT 2: Finite and within [0, EXACT_SCORE]
    assert!(first.is_finite(), "score {} is not finite", first);
    assert!(
        (0.0..=EXACT_SCORE).contains(&first),
        "score {} out of bounds",
        first
    );

    // INVARIANT 3: classify agrees with score
    let (tier, classified) = classify(&candidate, &query);
    assert_eq!(classified.to_bits(), first.to_bits());
    assert_eq!(tier == MatchTier::NoMatch, first == 0.0, "tier {:?} vs score {}", tier, first);

    // INVARIANT 4: Empty query never matches
    assert_eq!(score(&candidate, ""), 0.0);
});
