//! CLI module for the box office predictor
//!
//! Subcommands:
//! - `serve`: HTTP API + form UI
//! - `predict`: one prediction on the terminal
//! - `inspect`: load and validate an artifact directory

pub mod inspect;
pub mod predict;
pub mod serve;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::SchemaRevision;
use crate::infrastructure::logging::{self, LogTarget};

/// Box Office Predictor - revenue estimates from movie attributes
#[derive(Parser)]
#[command(name = "box-office-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API and the form UI
    Serve(serve::ServeArgs),

    /// Predict revenue for a single movie
    Predict(predict::PredictArgs),

    /// Load the artifacts and print what they contain
    Inspect(inspect::InspectArgs),
}

/// Artifact overrides shared by every subcommand
#[derive(Args, Clone, Debug, Default)]
pub struct ArtifactArgs {
    /// Directory holding model.json, freq_maps.json, target_maps.json and feature_order.json
    #[arg(long)]
    pub artifacts_dir: Option<PathBuf>,

    /// Schema revision of the artifacts (v1 or v2)
    #[arg(long)]
    pub revision: Option<SchemaRevision>,
}

impl ArtifactArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.artifacts_dir {
            config.artifacts.dir = dir.clone();
        }
        if let Some(revision) = self.revision {
            config.artifacts.revision = revision;
        }
    }
}

/// Read `.env` and the layered configuration; a bad source aborts the command
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::load().context("failed to load configuration")
}

pub(crate) fn init_logging(config: &AppConfig, target: LogTarget) {
    logging::init_logging(&config.logging, target);
}
