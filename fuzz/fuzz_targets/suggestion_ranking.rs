// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suggestion ranking invariants.
//!
//! Ranking is a filter plus a stable sort plus a truncate. Whatever the
//! fuzzer feeds it, the output must be a scored subset of the input, in
//! non-increasing score order, no longer than the limit, with ties in input
//! order.

#![no_main]

use costar::{rank_scored, score, Candidate};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    names: Vec<String>,
    query: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let query: String = input.query.chars().take(50).collect();
    let candidates: Vec<Candidate> = input
        .names
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, name)| Candidate::new(name.chars().take(100).collect::<String>(), i as i64))
        .collect();
    let limit = usize::from(input.limit);

    let ranked = rank_scored(&candidates, &query, limit);

    // INVARIANT 1: Respects limit
    assert!(ranked.len() <= limit);

    // INVARIANT 2: Only matches, scored as `score` scores them
    for item in &ranked {
        assert!(item.score > 0.0);
        assert_eq!(
            item.score.to_bits(),
            score(&item.candidate.display_text, &query).to_bits()
        );
    }

    // INVARIANT 3: Non-increasing score, stable ties
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "scores out of order");
        if pair[0].score == pair[1].score {
            assert!(
                pair[0].candidate.stable_id.as_text().parse::<usize>().unwrap_or(0)
                    < pair[1].candidate.stable_id.as_text().parse::<usize>().unwrap_or(0),
                "tie order changed"
            );
        }
    }

    // INVARIANT 4: Nothing that matches is dropped before the limit
    let matching = candidates
        .iter()
        .filter(|c| score(&c.display_text, &query) > 0.0)
        .count();
    assert_eq!(ranked.len(), matching.min(limit));
});
