//! Ranking properties: length bound, positivity, order, stability.

use super::common::make_candidates;
use costar::{rank, rank_scored};
use proptest::prelude::*;

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,6}( [A-Za-z]{1,6})?", 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_rank_respects_limit_and_order(
        names in names_strategy(),
        query in "[a-z]{1,4}",
        limit in 0usize..12,
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let ranked = rank_scored(&make_candidates(&refs), &query, limit);

        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.iter().all(|s| s.score > 0.0));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Equal scores keep the order the store returned them in.
    #[test]
    fn prop_ties_are_stable(names in names_strategy(), query in "[a-z]{1,3}") {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let ranked = rank_scored(&make_candidates(&refs), &query, usize::MAX);

        // ids are c0, c1, ... in input order
        let position = |id: &costar::StableId| -> usize {
            id.to_string()[1..].parse().unwrap()
        };
        for w in ranked.windows(2) {
            if w[0].score == w[1].score {
                prop_assert!(position(&w[0].candidate.stable_id) < position(&w[1].candidate.stable_id));
            }
        }
    }

    /// Ranking a ranked list again changes nothing.
    #[test]
    fn prop_rank_is_idempotent(names in names_strategy(), query in "[a-z]{1,3}") {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let once = rank(&make_candidates(&refs), &query, 8);
        let twice = rank(&once, &query, 8);
        prop_assert_eq!(once, twice);
    }
}
