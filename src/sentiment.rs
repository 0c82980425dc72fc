// src/sentiment.rs
//! Sentiment predictor: vectorize → classify → normalized label + confidence
//! distribution. Pure over the shared model artifacts; any number of calls
//! may run in parallel against the same predictor.

use crate::model::{SentimentClassifier, TextVectorizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Predicted label plus per-class confidence percentages.
///
/// `label` is the argmax class, stored lowercase. `distribution` is keyed by
/// lowercase class name with values in 0–100 rounded to two decimals; the
/// values need not sum to exactly 100 because each is rounded independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    pub distribution: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct SentimentPredictor {
    vectorizer: Arc<TextVectorizer>,
    classifier: Arc<SentimentClassifier>,
}

impl SentimentPredictor {
    /// Dimensional compatibility of the two artifacts is the engine's
    /// construction-time concern; the predictor assumes validated inputs.
    pub fn new(vectorizer: Arc<TextVectorizer>, classifier: Arc<SentimentClassifier>) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    pub fn predict(&self, text: &str) -> SentimentResult {
        let features = self.vectorizer.transform(text);
        let probs = self.classifier.predict_proba(&features);

        // Argmax; ties keep the classifier's class ordering (first wins).
        let mut best = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = i;
            }
        }
        let label = self.classifier.classes()[best].to_lowercase();

        let distribution = self
            .classifier
            .classes()
            .iter()
            .zip(probs.iter())
            .map(|(cls, p)| (cls.to_lowercase(), round_pct(*p)))
            .collect();

        SentimentResult {
            label,
            distribution,
        }
    }
}

/// Probability → percentage with two-decimal rounding.
fn round_pct(p: f64) -> f64 {
    (p * 10_000.0).round() / 100.0
}
