// src/model.rs
//! Model artifact boundary: the fitted text vectorizer and probabilistic
//! classifier the pipeline consumes as opaque, pre-trained inputs.
//!
//! Both artifacts are plain JSON produced by the training side:
//! - vectorizer: `{ word_ngrams, char_ngrams, features: [{ name, idf }, ...] }`
//! - classifier: `{ classes, coef, intercept }`
//!
//! Feature names carry a channel prefix (`word__` / `char__`); the declared
//! `features` order is the stable feature ordering the classifier was fitted
//! against. Validation happens once at load — after that, `transform` and
//! `predict_proba` are pure and infallible.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Namespace prefix for word-level n-gram features.
pub const WORD_PREFIX: &str = "word__";
/// Namespace prefix for character-level n-gram features.
pub const CHAR_PREFIX: &str = "char__";

/// Fatal artifact problems. Surfaces on the caller's startup path only;
/// nothing here is raised per analysis call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("vectorizer declares no features")]
    EmptyFeatureSpace,
    #[error("duplicate feature name `{0}` in vectorizer")]
    DuplicateFeature(String),
    #[error("invalid n-gram range {min}..={max}")]
    InvalidNgramRange { min: usize, max: usize },
    #[error("classifier declares no classes")]
    EmptyClassSet,
    #[error("duplicate class label `{0}` in classifier (labels collide after lowercasing)")]
    DuplicateClass(String),
    #[error("classifier has {coef_rows} coefficient rows for {classes} classes")]
    CoefficientShape { coef_rows: usize, classes: usize },
    #[error("classifier has {intercepts} intercepts for {classes} classes")]
    InterceptShape { intercepts: usize, classes: usize },
    #[error("ragged coefficient matrix: row {row} has {got} entries, expected {expected}")]
    RaggedCoefficients {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("classifier expects {classifier} features but vectorizer produces {vectorizer}")]
    DimensionMismatch {
        classifier: usize,
        vectorizer: usize,
    },
}

/// Inclusive n-gram size range, e.g. `{ "min": 1, "max": 2 }`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl NgramRange {
    fn validate(self) -> Result<Self, ModelError> {
        if self.min == 0 || self.max < self.min {
            return Err(ModelError::InvalidNgramRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }
}

fn default_word_ngrams() -> NgramRange {
    NgramRange { min: 1, max: 1 }
}

fn default_char_ngrams() -> NgramRange {
    NgramRange { min: 3, max: 3 }
}

#[derive(Debug, Deserialize)]
struct FeatureSpec {
    name: String,
    idf: f64,
}

#[derive(Debug, Deserialize)]
struct VectorizerSpec {
    #[serde(default = "default_word_ngrams")]
    word_ngrams: NgramRange,
    #[serde(default = "default_char_ngrams")]
    char_ngrams: NgramRange,
    features: Vec<FeatureSpec>,
}

/// Fitted text → feature-vector transform (word + char n-gram channels,
/// term count × idf per dimension).
#[derive(Debug)]
pub struct TextVectorizer {
    word_ngrams: NgramRange,
    char_ngrams: NgramRange,
    names: Vec<String>,
    idf: Vec<f64>,
    index: HashMap<String, usize>,
}

impl TextVectorizer {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let v = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            features = v.len(),
            "loaded vectorizer artifact"
        );
        Ok(v)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ModelError> {
        let spec: VectorizerSpec = serde_json::from_str(raw)?;
        if spec.features.is_empty() {
            return Err(ModelError::EmptyFeatureSpace);
        }
        let word_ngrams = spec.word_ngrams.validate()?;
        let char_ngrams = spec.char_ngrams.validate()?;

        let mut names = Vec::with_capacity(spec.features.len());
        let mut idf = Vec::with_capacity(spec.features.len());
        let mut index = HashMap::with_capacity(spec.features.len());
        for (i, f) in spec.features.into_iter().enumerate() {
            if index.insert(f.name.clone(), i).is_some() {
                return Err(ModelError::DuplicateFeature(f.name));
            }
            names.push(f.name);
            idf.push(f.idf);
        }

        Ok(Self {
            word_ngrams,
            char_ngrams,
            names,
            idf,
            index,
        })
    }

    /// Number of output dimensions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Stable feature-name ordering, aligned with `transform` output indices.
    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    /// Map text to its dense feature vector. Out-of-vocabulary or empty text
    /// legally yields an all-zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0_f64; self.names.len()];
        let lower = text.to_lowercase();

        // Word channel: alphanumeric tokens, n-grams joined by single spaces.
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        for n in self.word_ngrams.min..=self.word_ngrams.max {
            if tokens.len() < n {
                continue;
            }
            for window in tokens.windows(n) {
                let gram = format!("{WORD_PREFIX}{}", window.join(" "));
                if let Some(&i) = self.index.get(&gram) {
                    counts[i] += 1.0;
                }
            }
        }

        // Char channel: raw character n-grams over the lowercased text.
        let chars: Vec<char> = lower.chars().collect();
        for n in self.char_ngrams.min..=self.char_ngrams.max {
            if chars.len() < n {
                continue;
            }
            for window in chars.windows(n) {
                let mut gram = String::with_capacity(CHAR_PREFIX.len() + n * 4);
                gram.push_str(CHAR_PREFIX);
                gram.extend(window.iter());
                if let Some(&i) = self.index.get(&gram) {
                    counts[i] += 1.0;
                }
            }
        }

        for (c, w) in counts.iter_mut().zip(self.idf.iter()) {
            *c *= w;
        }
        counts
    }
}

#[derive(Debug, Deserialize)]
struct ClassifierSpec {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

/// Fitted multinomial logistic classifier over the vectorizer's feature space.
#[derive(Debug)]
pub struct SentimentClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl SentimentClassifier {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let c = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            classes = c.classes.len(),
            features = c.n_features(),
            "loaded classifier artifact"
        );
        Ok(c)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ModelError> {
        let spec: ClassifierSpec = serde_json::from_str(raw)?;
        if spec.classes.is_empty() {
            return Err(ModelError::EmptyClassSet);
        }
        // Distribution keys are lowercased downstream, so class labels that
        // collide after lowercasing would silently merge there. Fatal here.
        let mut seen = HashSet::with_capacity(spec.classes.len());
        for cls in &spec.classes {
            if !seen.insert(cls.to_lowercase()) {
                return Err(ModelError::DuplicateClass(cls.clone()));
            }
        }
        if spec.coef.len() != spec.classes.len() {
            return Err(ModelError::CoefficientShape {
                coef_rows: spec.coef.len(),
                classes: spec.classes.len(),
            });
        }
        if spec.intercept.len() != spec.classes.len() {
            return Err(ModelError::InterceptShape {
                intercepts: spec.intercept.len(),
                classes: spec.classes.len(),
            });
        }
        let expected = spec.coef[0].len();
        for (row, r) in spec.coef.iter().enumerate() {
            if r.len() != expected {
                return Err(ModelError::RaggedCoefficients {
                    row,
                    got: r.len(),
                    expected,
                });
            }
        }

        Ok(Self {
            classes: spec.classes,
            coef: spec.coef,
            intercept: spec.intercept,
        })
    }

    /// Known labels in the stable order the model was fitted with.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Input dimensionality the coefficient matrix was fitted against.
    pub fn n_features(&self) -> usize {
        self.coef[0].len()
    }

    /// Per-class probabilities via softmax over the linear scores.
    /// `features` length must equal `n_features()` (checked at engine
    /// construction, not here).
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(self.intercept.iter())
            .map(|(row, b)| row.iter().zip(features.iter()).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect();

        // Max-shifted softmax for numeric stability.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }
}
