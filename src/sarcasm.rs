// src/sarcasm.rs
//! Multi-rule sarcasm heuristic. Three independent rules, OR-combined; this
//! is a precision/recall trade-off, not a learned classifier, so texts that
//! legitimately mix sentiment can trip rule 3.

use once_cell::sync::Lazy;
use regex::Regex;

/// Explicit sarcasm cues, matched as case-insensitive substrings.
const SARCASM_MARKERS: &[&str] = &[
    "/s",
    "yeah right",
    "as if",
    "sure thing",
    "just perfect",
    "oh wow",
];

// Rule 2: backhanded compliment ("I love/like how/that ...") plus a
// negative-outcome word anywhere in the text.
static BACKHANDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bi (love|like) (how|that)\b").expect("backhanded regex"));
static NEGATIVE_OUTCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(crash(es|ed|ing)?|fail(s|ed|ing|ure)?|bad|worst|broken|useless)\b")
        .expect("outcome regex")
});

// Rule 3: strongly positive and strongly negative words co-occurring.
static STRONG_POSITIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(good|great|love|amazing)\b").expect("positive regex"));
static STRONG_NEGATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(bad|worst|hate|awful|terrible|disaster)\b").expect("negative regex")
});

/// True when any rule fires. Total over any string input.
pub fn detect_sarcasm(text: &str) -> bool {
    let lower = text.to_lowercase();

    if SARCASM_MARKERS.iter().any(|m| lower.contains(m)) {
        return true;
    }
    if BACKHANDED.is_match(&lower) && NEGATIVE_OUTCOME.is_match(&lower) {
        return true;
    }
    if STRONG_POSITIVE.is_match(&lower) && STRONG_NEGATIVE.is_match(&lower) {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_markers_fire() {
        assert!(detect_sarcasm("Oh wow, another update"));
        assert!(detect_sarcasm("sure thing, boss"));
        assert!(detect_sarcasm("works every time /s"));
    }

    #[test]
    fn backhanded_compliment_needs_negative_outcome() {
        assert!(detect_sarcasm("I love how this app crashes every time"));
        assert!(detect_sarcasm("i like that it is broken again"));
        // The pattern alone, without a negative-outcome word, is not enough.
        assert!(!detect_sarcasm("I love how smooth this feels"));
    }

    #[test]
    fn inflected_outcome_words_fire_rule_two() {
        assert!(detect_sarcasm("I love how the sync failed again"));
        assert!(detect_sarcasm("i like how it keeps crashing"));
        assert!(detect_sarcasm("I love that every update is a failure"));
        // Inflection widening must not loosen the word boundary itself.
        assert!(!detect_sarcasm("I love how the badge looks"));
    }

    #[test]
    fn polarity_clash_fires() {
        assert!(detect_sarcasm("great but the worst battery life"));
        assert!(detect_sarcasm("amazing screen, terrible speakers"));
    }

    #[test]
    fn plain_praise_does_not_fire() {
        assert!(!detect_sarcasm("This is amazing, best purchase ever"));
        assert!(!detect_sarcasm(""));
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "goodbye" must not count as "good", nor "badge" as "bad".
        assert!(!detect_sarcasm("goodbye badge"));
    }
}
