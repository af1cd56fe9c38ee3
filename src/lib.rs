//! Box Office Predictor
//!
//! Estimates worldwide box-office revenue for a movie from a handful of form
//! attributes. Features are encoded with lookup tables produced by the training
//! pipeline, arranged in the model's feature order, and scored by a regression model
//! whose log-space output is converted back to dollars.
//!
//! Two schema revisions exist:
//! - `v1`: free-text form, 9 features
//! - `v2`: dropdown form, 12 features (adds frequency-encoded genre, language, country)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use anyhow::Context;

use api::state::AppState;
use domain::Predictor;
use infrastructure::artifacts::ArtifactLoader;

/// Load the artifacts named by the configuration and build a predictor
pub fn create_predictor(config: &AppConfig) -> anyhow::Result<Predictor> {
    let artifacts = &config.artifacts;
    let predictor = ArtifactLoader::new(artifacts.clone())
        .load_predictor()
        .with_context(|| format!("failed to load artifacts from {}", artifacts.dir.display()))?;

    Ok(predictor)
}

/// Create the application state from the given configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    Ok(AppState::new(create_predictor(config)?))
}
