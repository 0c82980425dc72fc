// src/engine.rs
//! # Analysis Engine
//! Orchestrates one analysis pass: sentiment prediction plus the four
//! heuristic detectors and the keyword explainer over the same input text,
//! assembled into a timestamped `AnalysisRecord`.
//!
//! The engine is read-only after construction; calls are synchronous, pure
//! over the loaded artifacts, and safe to run concurrently.

use crate::aspect::analyze_aspects;
use crate::chatbot::respond;
use crate::config::ModelConfig;
use crate::emotion::{detect_emotion, Emotion};
use crate::keywords::explain_keywords;
use crate::model::{ModelError, SentimentClassifier, TextVectorizer};
use crate::sarcasm::detect_sarcasm;
use crate::sentiment::{SentimentPredictor, SentimentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// One full analysis of one input text. A plain value: the engine never
/// stores it, the caller owns persistence and any reconciliation between
/// the raw sentiment and the sarcasm flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub text: String,
    pub sentiment: SentimentResult,
    pub emotion: Emotion,
    pub aspects: BTreeMap<String, String>,
    pub sarcasm: bool,
    pub keywords: Vec<String>,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    vectorizer: Arc<TextVectorizer>,
    predictor: SentimentPredictor,
    top_k: usize,
}

impl AnalysisEngine {
    /// Build from already-loaded artifacts. Fails when the classifier was
    /// fitted against a different feature dimensionality than the vectorizer
    /// produces — fatal, there is no per-call recovery.
    pub fn new(
        vectorizer: TextVectorizer,
        classifier: SentimentClassifier,
    ) -> Result<Self, ModelError> {
        if classifier.n_features() != vectorizer.len() {
            return Err(ModelError::DimensionMismatch {
                classifier: classifier.n_features(),
                vectorizer: vectorizer.len(),
            });
        }
        let vectorizer = Arc::new(vectorizer);
        let classifier = Arc::new(classifier);
        Ok(Self {
            predictor: SentimentPredictor::new(vectorizer.clone(), classifier),
            vectorizer,
            top_k: crate::config::DEFAULT_TOP_K,
        })
    }

    /// Load both artifacts from the configured paths and validate the pair.
    pub fn from_config(cfg: &ModelConfig) -> Result<Self, ModelError> {
        let vectorizer = TextVectorizer::from_path(&cfg.vectorizer_path)?;
        let classifier = SentimentClassifier::from_path(&cfg.classifier_path)?;
        Ok(Self::new(vectorizer, classifier)?.with_top_k(cfg.top_k))
    }

    /// Number of explanatory keywords per record (builder style).
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn predictor(&self) -> &SentimentPredictor {
        &self.predictor
    }

    /// Run the full pipeline on `text`.
    ///
    /// Empty or whitespace-only input is the caller's concern to reject
    /// beforehand; it is not special-cased here and degenerates to a
    /// zero-vector prediction.
    pub fn analyze(&self, text: &str) -> AnalysisRecord {
        let sentiment = self.predictor.predict(text);
        let emotion = detect_emotion(text);
        let aspects = analyze_aspects(text, &self.predictor);
        let sarcasm = detect_sarcasm(text);
        let keywords = explain_keywords(&self.vectorizer, text, self.top_k);
        let response = respond(&sentiment.label).to_string();

        debug!(
            label = %sentiment.label,
            emotion = %emotion,
            sarcasm,
            aspects = aspects.len(),
            keywords = keywords.len(),
            "analysis complete"
        );

        AnalysisRecord {
            text: text.to_string(),
            sentiment,
            emotion,
            aspects,
            sarcasm,
            keywords,
            response,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SentimentClassifier, TextVectorizer};

    const VEC_JSON: &str = r#"{
        "features": [
            { "name": "word__great", "idf": 2.0 },
            { "name": "word__terrible", "idf": 2.0 },
            { "name": "word__camera", "idf": 1.0 }
        ]
    }"#;

    const CLS_JSON: &str = r#"{
        "classes": ["negative", "neutral", "positive"],
        "coef": [[-1.5, 1.5, 0.0], [0.0, 0.0, 0.2], [1.5, -1.5, 0.0]],
        "intercept": [0.0, 0.1, 0.0]
    }"#;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(
            TextVectorizer::from_json_str(VEC_JSON).unwrap(),
            SentimentClassifier::from_json_str(CLS_JSON).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn dimension_mismatch_is_fatal_at_construction() {
        let v = TextVectorizer::from_json_str(VEC_JSON).unwrap();
        let c = SentimentClassifier::from_json_str(
            r#"{
                "classes": ["negative", "positive"],
                "coef": [[-1.0], [1.0]],
                "intercept": [0.0, 0.0]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            AnalysisEngine::new(v, c),
            Err(ModelError::DimensionMismatch {
                classifier: 1,
                vectorizer: 3
            })
        ));
    }

    #[test]
    fn record_carries_all_five_outputs_plus_response() {
        let e = engine();
        let r = e.analyze("the camera is great 🙂");
        assert_eq!(r.sentiment.label, "positive");
        assert_eq!(r.emotion, Emotion::Joy);
        assert_eq!(r.aspects.get("Camera").map(String::as_str), Some("positive"));
        assert!(!r.sarcasm);
        assert_eq!(r.keywords, vec!["great", "camera"]);
        assert_eq!(r.response, respond("positive"));
        assert_eq!(r.text, "the camera is great 🙂");
    }

    #[test]
    fn rerun_differs_only_in_timestamp() {
        let e = engine();
        let a = e.analyze("great but the worst battery life");
        let b = e.analyze("great but the worst battery life");
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.emotion, b.emotion);
        assert_eq!(a.aspects, b.aspects);
        assert_eq!(a.sarcasm, b.sarcasm);
        assert_eq!(a.keywords, b.keywords);
        assert_eq!(a.response, b.response);
    }

    #[test]
    fn top_k_is_configurable() {
        let e = engine().with_top_k(1);
        let r = e.analyze("great camera, terrible battery");
        assert_eq!(r.keywords.len(), 1);
    }
}
