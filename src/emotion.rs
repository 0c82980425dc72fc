// src/emotion.rs
//! Emoji/emoticon and lexicon-based emotion inference.
//!
//! Strict priority chain, first match wins:
//! 1. emoji table (fixed declaration order)
//! 2. textual emoticons
//! 3. literal `/s` sarcasm marker, reported as `surprise`
//! 4. keyword lexicon (fixed category order)
//! 5. `neutral`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed emotion label set. Exactly one label per input, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Surprise,
    Fear,
    Disgust,
    Neutral,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emoji → emotion table. Declaration order is the tie-break when emojis of
/// different emotions co-occur, so this must stay a slice, not a map.
const EMOJI_TABLE: &[(&str, Emotion)] = &[
    ("🙂", Emotion::Joy),
    ("😊", Emotion::Joy),
    ("😃", Emotion::Joy),
    ("😢", Emotion::Sadness),
    ("😭", Emotion::Sadness),
    ("😡", Emotion::Anger),
    ("😠", Emotion::Anger),
    ("😱", Emotion::Fear),
    ("😲", Emotion::Surprise),
    ("🤢", Emotion::Disgust),
    ("😐", Emotion::Neutral),
];

static JOY_EMOTICONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:-\)|:\)|:D)").expect("emoticon regex"));
static SAD_EMOTICONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:-\(|:\()").expect("emoticon regex"));

/// Lexicon fallback categories, evaluated in this order.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Joy, &["love", "happy", "great", "amazing"]),
    (Emotion::Anger, &["hate", "angry", "furious"]),
    (Emotion::Sadness, &["sad", "terrible", "worst"]),
    (Emotion::Surprise, &["wow", "shocked"]),
    (Emotion::Fear, &["scared", "worried"]),
    (Emotion::Disgust, &["disgusting", "gross", "nasty"]),
];

/// Symbol-level pass: emoji table, then emoticons, then the `/s` marker.
/// `/s` deliberately reports `surprise` rather than a dedicated sarcasm
/// emotion; the boolean sarcasm detector carries that signal instead.
fn symbol_emotion(text: &str) -> Option<Emotion> {
    for (emoji, emotion) in EMOJI_TABLE {
        if text.contains(emoji) {
            return Some(*emotion);
        }
    }
    if JOY_EMOTICONS.is_match(text) {
        return Some(Emotion::Joy);
    }
    if SAD_EMOTICONS.is_match(text) {
        return Some(Emotion::Sadness);
    }
    if text.to_lowercase().contains("/s") {
        return Some(Emotion::Surprise);
    }
    None
}

/// Detect the emotion of `text`. Total over any string; defaults to neutral.
pub fn detect_emotion(text: &str) -> Emotion {
    if let Some(emotion) = symbol_emotion(text) {
        return emotion;
    }
    let lower = text.to_lowercase();
    for (emotion, keywords) in EMOTION_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *emotion;
        }
    }
    Emotion::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_wins_over_lexicon() {
        // "happy" alone would match the joy lexicon, but the emoji decides.
        assert_eq!(detect_emotion("I am happy 🙂"), Emotion::Joy);
        assert_eq!(detect_emotion("so happy 😢 though"), Emotion::Sadness);
    }

    #[test]
    fn emoji_declaration_order_breaks_coocurrence() {
        // Sadness emoji is declared before anger's, so it wins.
        assert_eq!(detect_emotion("😡 😢 what a day"), Emotion::Sadness);
    }

    #[test]
    fn emoticons_match_when_no_emoji() {
        assert_eq!(detect_emotion("went fine :)"), Emotion::Joy);
        assert_eq!(detect_emotion("went badly :-("), Emotion::Sadness);
        assert_eq!(detect_emotion("nice :D"), Emotion::Joy);
    }

    #[test]
    fn sarcasm_marker_reports_surprise() {
        assert_eq!(detect_emotion("best update ever /s"), Emotion::Surprise);
        assert_eq!(detect_emotion("best update ever /S"), Emotion::Surprise);
    }

    #[test]
    fn lexicon_fallback_in_declared_order() {
        assert_eq!(detect_emotion("I hate this"), Emotion::Anger);
        assert_eq!(detect_emotion("so scared right now"), Emotion::Fear);
        // joy is evaluated before sadness, so a mixed text resolves to joy
        assert_eq!(detect_emotion("great but sad"), Emotion::Joy);
    }

    #[test]
    fn neutral_default() {
        assert_eq!(detect_emotion("the package arrived on tuesday"), Emotion::Neutral);
        assert_eq!(detect_emotion(""), Emotion::Neutral);
    }
}
