// src/config.rs
//! Model-artifact configuration: where the fitted vectorizer and classifier
//! live on disk, plus explainer defaults. Loaded from TOML with env-var
//! overrides, resolved once at startup.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL_CONFIG_PATH: &str = "config/model.toml";
pub const DEFAULT_TOP_K: usize = 3;

pub const ENV_MODEL_CONFIG_PATH: &str = "SENTICORE_MODEL_CONFIG";
pub const ENV_VECTORIZER_PATH: &str = "SENTICORE_VECTORIZER_PATH";
pub const ENV_CLASSIFIER_PATH: &str = "SENTICORE_CLASSIFIER_PATH";

#[derive(Debug, Clone, Deserialize)]
struct ModelRoot {
    model: ModelSection,
    #[serde(default)]
    explain: ExplainSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ModelSection {
    vectorizer_path: PathBuf,
    classifier_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct ExplainSection {
    #[serde(default = "default_top_k")]
    top_k: usize,
}

impl Default for ExplainSection {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Resolved artifact locations and explainer defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub vectorizer_path: PathBuf,
    pub classifier_path: PathBuf,
    pub top_k: usize,
}

impl ModelConfig {
    /// Load from the TOML file named by `SENTICORE_MODEL_CONFIG` (default
    /// `config/model.toml`), then apply per-path env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_MODEL_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_CONFIG_PATH));

        let content = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read model config at {}: {}", path.display(), e)
        })?;

        let mut cfg = Self::from_toml_str(&content)?;
        if let Ok(p) = std::env::var(ENV_VECTORIZER_PATH) {
            cfg.vectorizer_path = PathBuf::from(p);
        }
        if let Ok(p) = std::env::var(ENV_CLASSIFIER_PATH) {
            cfg.classifier_path = PathBuf::from(p);
        }
        Ok(cfg)
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let root: ModelRoot = toml::from_str(toml_str)?;
        Ok(Self {
            vectorizer_path: root.model.vectorizer_path,
            classifier_path: root.model.classifier_path,
            top_k: root.explain.top_k,
        })
    }
}
