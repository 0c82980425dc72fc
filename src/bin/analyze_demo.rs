//! Demo caller: loads the configured model artifacts, runs one analysis over
//! the command-line text, and prints the resulting record as JSON.
//!
//! ```text
//! SENTICORE_MODEL_CONFIG=config/model.toml \
//!     cargo run --bin analyze_demo -- "The camera is great but battery life is terrible"
//! ```

use anyhow::Context;
use senticore::{AnalysisEngine, ModelConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    // Empty input is the caller's responsibility, and here we are the caller.
    anyhow::ensure!(!text.trim().is_empty(), "usage: analyze_demo <text>");

    let cfg = ModelConfig::load()?;
    let engine = AnalysisEngine::from_config(&cfg).context("loading model artifacts")?;

    let record = engine.analyze(&text);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
