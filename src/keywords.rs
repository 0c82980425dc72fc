// src/keywords.rs
//! Explainability: surface the feature names that carry the most weight for
//! a given text, falling back to raw tokens when the vectorizer has no
//! signal at all (fully out-of-vocabulary input).

use crate::model::{TextVectorizer, CHAR_PREFIX, WORD_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\w+").expect("token regex"));

/// Top `top_k` influential terms for `text`, relevance-descending.
///
/// Channel prefixes are stripped so word- and char-level features present
/// uniformly; names are deduplicated after stripping. When every feature
/// weight is zero, the first `top_k` word-like tokens of the raw text are
/// returned in original order instead.
pub fn explain_keywords(vectorizer: &TextVectorizer, text: &str, top_k: usize) -> Vec<String> {
    let weights = vectorizer.transform(text);
    if weights.iter().all(|&w| w == 0.0) {
        return TOKEN_RE
            .find_iter(text)
            .take(top_k)
            .map(|m| m.as_str().to_string())
            .collect();
    }

    let mut indices: Vec<usize> = (0..weights.len()).collect();
    // Stable sort: equal weights keep feature-declaration order.
    indices.sort_by(|&a, &b| weights[b].partial_cmp(&weights[a]).unwrap_or(Ordering::Equal));

    let names = vectorizer.feature_names();
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(top_k);
    for i in indices {
        if weights[i] <= 0.0 {
            break;
        }
        let name = strip_channel_prefix(&names[i]);
        if seen.insert(name.to_string()) {
            out.push(name.to_string());
            if out.len() == top_k {
                break;
            }
        }
    }
    out
}

fn strip_channel_prefix(name: &str) -> &str {
    name.strip_prefix(WORD_PREFIX)
        .or_else(|| name.strip_prefix(CHAR_PREFIX))
        .unwrap_or(name)
}
