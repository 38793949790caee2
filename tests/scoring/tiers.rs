//! Tier boundaries and the documented scoring examples.

use costar::scoring::{
    classify, score, MatchTier, EXACT_SCORE, PREFIX_BASE_SCORE, SUBSEQUENCE_MAX_SCORE,
    SUBSTRING_BASE_SCORE, WORD_PREFIX_BASE_SCORE,
};

// ============================================================================
// DOCUMENTED EXAMPLES
// ============================================================================

#[test]
fn test_prefix_beats_word_prefix() {
    assert!(score("Spider-Man", "spider") > score("The Spider", "spider"));
    assert_eq!(classify("Spider-Man", "spider").0, MatchTier::Prefix);
    assert_eq!(classify("The Spider", "spider").0, MatchTier::WordPrefix);
}

#[test]
fn test_empty_query_scores_zero() {
    for candidate in ["", "Heat", "Tom Hanks"] {
        assert_eq!(score(candidate, ""), 0.0);
    }
}

#[test]
fn test_subsequence_requires_order() {
    assert!(score("Schwarzenegger", "swz") > 0.0);
    assert_eq!(classify("Schwarzenegger", "swz").0, MatchTier::Subsequence);
    assert_eq!(score("Schwarzenegger", "zws"), 0.0);
}

// ============================================================================
// TIER BANDS
// ============================================================================

#[test]
fn test_each_tier_lands_in_its_band() {
    let cases = [
        ("Heat", "heat", MatchTier::Exact),
        ("Heat and Dust", "heat", MatchTier::Prefix),
        ("The Heat", "heat", MatchTier::WordPrefix),
        ("Theatre", "heat", MatchTier::Substring),
        ("Hot Eating", "heat", MatchTier::Subsequence),
    ];
    for (candidate, query, expected) in cases {
        let (tier, s) = classify(candidate, query);
        assert_eq!(tier, expected, "{} / {}", candidate, query);
        let (low, high) = match tier {
            MatchTier::Exact => (EXACT_SCORE, EXACT_SCORE),
            MatchTier::Prefix => (PREFIX_BASE_SCORE - 99.0, PREFIX_BASE_SCORE),
            MatchTier::WordPrefix => (WORD_PREFIX_BASE_SCORE - 99.0, WORD_PREFIX_BASE_SCORE),
            MatchTier::Substring => (SUBSTRING_BASE_SCORE - 99.0, SUBSTRING_BASE_SCORE),
            MatchTier::Subsequence => (f64::MIN_POSITIVE, SUBSEQUENCE_MAX_SCORE),
            MatchTier::NoMatch => (0.0, 0.0),
        };
        assert!(s >= low && s <= high, "{} scored {} outside [{}, {}]", candidate, s, low, high);
    }
}

#[test]
fn test_longest_prefix_candidate_still_beats_best_word_prefix() {
    let long = format!("Heat{}", "x".repeat(500));
    assert!(score(&long, "heat") > score("A Heat", "heat"));
}

#[test]
fn test_late_substring_still_beats_best_subsequence() {
    let late = format!("{}theatre", "x".repeat(500));
    let (tier, s) = classify(&late, "heat");
    assert_eq!(tier, MatchTier::Substring);
    assert!(s > SUBSEQUENCE_MAX_SCORE);
}

#[test]
fn test_case_insensitive_everywhere() {
    assert_eq!(score("TOM HANKS", "tom hanks"), EXACT_SCORE);
    assert_eq!(score("tom hanks", "Tom Han"), score("Tom Hanks", "tom han"));
}

#[test]
fn test_unicode_positions_count_chars() {
    // 'é' is two bytes; the penalty counts it as one position.
    let (_, accented) = classify("éxheat", "heat");
    let (_, plain) = classify("exheat", "heat");
    assert_eq!(accented, plain);
}

#[test]
fn test_streak_outscores_scatter() {
    let streak = score("Xanadu Boulevard", "xbou");
    let scatter = score("Xanadu Big Other Unit", "xbou");
    assert!(streak > scatter, "{} <= {}", streak, scatter);
}
