// src/aspect.rs
//! Keyword-driven aspect identification with per-aspect polarity.
//!
//! Polarity is a *global* tally: every mentioned aspect in one text shares
//! the same positive/negative word counts. Known approximation; aspect-local
//! context is not scoped.

use crate::sentiment::SentimentPredictor;
use std::collections::BTreeMap;

/// Synthetic aspect recorded when no catalog aspect is mentioned.
pub const GENERAL_ASPECT: &str = "General";

/// Fixed aspect catalog with its trigger keywords.
const ASPECT_KEYWORDS: &[(&str, &[&str])] = &[
    ("Camera", &["camera", "photo"]),
    ("Battery", &["battery", "charge"]),
    ("Screen", &["screen", "display"]),
    ("Performance", &["speed", "lag", "performance"]),
    ("Design", &["design", "look"]),
    ("Price", &["price", "cost"]),
    ("Audio", &["audio", "sound", "speaker"]),
];

const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "love", "nice", "fast", "bright"];
const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "worst", "slow", "dim", "crash", "broken"];

/// Map each mentioned aspect to `"positive"` / `"negative"` / `"neutral"`.
///
/// Always yields at least one entry: texts mentioning no catalog aspect get
/// a single `"General"` entry holding the sentiment predictor's own label
/// for the full text (same label space, recorded verbatim).
pub fn analyze_aspects(text: &str, predictor: &SentimentPredictor) -> BTreeMap<String, String> {
    let lower = text.to_lowercase();
    let mut aspects = BTreeMap::new();

    // One global tally per text; counts lexicon words present, not occurrences.
    let pos = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    for (aspect, keywords) in ASPECT_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            let polarity = match pos.cmp(&neg) {
                std::cmp::Ordering::Greater => "positive",
                std::cmp::Ordering::Less => "negative",
                std::cmp::Ordering::Equal => "neutral",
            };
            aspects.insert((*aspect).to_string(), polarity.to_string());
        }
    }

    if aspects.is_empty() {
        let general = predictor.predict(text);
        aspects.insert(GENERAL_ASPECT.to_string(), general.label);
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SentimentClassifier, TextVectorizer};
    use crate::sentiment::SentimentPredictor;
    use std::sync::Arc;

    fn predictor() -> SentimentPredictor {
        let v = TextVectorizer::from_json_str(
            r#"{ "features": [
                { "name": "word__awesome", "idf": 1.0 },
                { "name": "word__dreadful", "idf": 1.0 }
            ]}"#,
        )
        .unwrap();
        let c = SentimentClassifier::from_json_str(
            r#"{
                "classes": ["negative", "neutral", "positive"],
                "coef": [[-2.0, 2.0], [0.0, 0.0], [2.0, -2.0]],
                "intercept": [0.0, 0.1, 0.0]
            }"#,
        )
        .unwrap();
        SentimentPredictor::new(Arc::new(v), Arc::new(c))
    }

    #[test]
    fn mentioned_aspects_share_the_global_tally() {
        let p = predictor();
        let m = analyze_aspects("The camera is great but battery life is terrible", &p);
        // One positive word, one negative word → exact tie → both neutral.
        assert_eq!(m.get("Camera").map(String::as_str), Some("neutral"));
        assert_eq!(m.get("Battery").map(String::as_str), Some("neutral"));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn majority_count_decides_polarity() {
        let p = predictor();
        let m = analyze_aspects("great camera, nice photos, slow charge", &p);
        // Two positive words vs one negative, globally.
        assert_eq!(m.get("Camera").map(String::as_str), Some("positive"));
        assert_eq!(m.get("Battery").map(String::as_str), Some("positive"));
    }

    #[test]
    fn no_polarity_words_means_neutral() {
        let p = predictor();
        let m = analyze_aspects("the screen exists", &p);
        assert_eq!(m.get("Screen").map(String::as_str), Some("neutral"));
    }

    #[test]
    fn general_fallback_uses_predictor_label() {
        let p = predictor();
        let m = analyze_aspects("simply awesome", &p);
        assert_eq!(m.len(), 1);
        assert_eq!(
            m.get(GENERAL_ASPECT).map(String::as_str),
            Some(p.predict("simply awesome").label.as_str())
        );
        assert_eq!(m.get(GENERAL_ASPECT).map(String::as_str), Some("positive"));
    }
}
