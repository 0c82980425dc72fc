// src/lib.rs
// Public library surface for integration tests (and embedding callers).

pub mod aspect;
pub mod chatbot;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod keywords;
pub mod model;
pub mod sarcasm;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::aspect::{analyze_aspects, GENERAL_ASPECT};
pub use crate::chatbot::respond;
pub use crate::config::ModelConfig;
pub use crate::emotion::{detect_emotion, Emotion};
pub use crate::engine::{AnalysisEngine, AnalysisRecord};
pub use crate::keywords::explain_keywords;
pub use crate::model::{ModelError, SentimentClassifier, TextVectorizer};
pub use crate::sarcasm::detect_sarcasm;
pub use crate::sentiment::{SentimentPredictor, SentimentResult};
