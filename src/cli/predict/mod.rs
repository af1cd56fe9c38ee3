//! Predict command - scores one movie and prints the estimate

use std::fmt::Write as _;

use clap::Args;

use super::ArtifactArgs;
use crate::api::types::PredictResponse;
use crate::domain::movie::{
    options, DEFAULT_BUDGET, DEFAULT_RELEASE_YEAR, DEFAULT_RUNTIME, DEFAULT_VOTE_AVERAGE,
    DEFAULT_VOTE_COUNT,
};
use crate::domain::{CategoricalField, MovieInput, Prediction, SchemaRevision};
use crate::infrastructure::logging::LogTarget;

/// Arguments for the predict command; every field defaults to the form's pre-filled value
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Production budget in USD
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    pub budget: f64,

    #[arg(long, default_value_t = DEFAULT_RELEASE_YEAR)]
    pub release_year: i32,

    /// Release month as a number (7) or an English name (July)
    #[arg(long, default_value = "7", value_parser = parse_month_arg)]
    pub release_month: u32,

    /// Average rating, 0-10
    #[arg(long, default_value_t = DEFAULT_VOTE_AVERAGE)]
    pub vote_average: f64,

    #[arg(long, default_value_t = DEFAULT_VOTE_COUNT)]
    pub vote_count: u64,

    /// Runtime in minutes
    #[arg(long, default_value_t = DEFAULT_RUNTIME)]
    pub runtime: u32,

    #[arg(long)]
    pub director: Option<String>,

    #[arg(long)]
    pub lead_actor: Option<String>,

    #[arg(long)]
    pub primary_company: Option<String>,

    /// Only used by v2 artifacts
    #[arg(long)]
    pub main_genre: Option<String>,

    /// Only used by v2 artifacts
    #[arg(long)]
    pub original_language: Option<String>,

    /// Only used by v2 artifacts
    #[arg(long)]
    pub primary_country: Option<String>,

    /// Print the encoded feature row before the estimate
    #[arg(long)]
    pub show_features: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

impl PredictArgs {
    /// Build the movie input, filling unset categorical fields with the revision's defaults
    pub fn to_input(&self, revision: SchemaRevision) -> MovieInput {
        let mut input = MovieInput::new()
            .with_budget(self.budget)
            .with_release(self.release_year, self.release_month)
            .with_votes(self.vote_average, self.vote_count)
            .with_runtime(self.runtime);

        for &field in revision.categorical_fields() {
            let value = self
                .category(field)
                .unwrap_or_else(|| options::default_choice(revision, field));
            input = input.with_category(field, value);
        }

        input
    }

    fn category(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Director => self.director.as_deref(),
            CategoricalField::LeadActor => self.lead_actor.as_deref(),
            CategoricalField::PrimaryCompany => self.primary_company.as_deref(),
            CategoricalField::MainGenre => self.main_genre.as_deref(),
            CategoricalField::OriginalLanguage => self.original_language.as_deref(),
            CategoricalField::PrimaryCountry => self.primary_country.as_deref(),
        }
    }
}

fn parse_month_arg(value: &str) -> Result<u32, String> {
    options::parse_month(value)
        .ok_or_else(|| format!("'{}' is not a month (use 1-12 or a month name)", value))
}

/// Run a single prediction
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let mut config = super::load_config()?;
    args.artifacts.apply(&mut config);

    // stdout carries the result; logs stay quiet on stderr unless RUST_LOG asks for more
    config.logging.level = "warn".to_string();
    super::init_logging(&config, LogTarget::Stderr);

    let predictor = crate::create_predictor(&config)?;
    let input = args.to_input(predictor.revision());
    let prediction = predictor.predict(&input)?;

    if args.json {
        let response = PredictResponse::from_domain(&prediction, args.show_features);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_text(&prediction, args.show_features));
    }

    Ok(())
}

fn render_text(prediction: &Prediction, show_features: bool) -> String {
    let mut out = String::new();

    if show_features {
        let width = prediction
            .features
            .names()
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0);

        let _ = writeln!(out, "Features ({}):", prediction.revision);
        for (name, value) in prediction.features.iter() {
            let _ = writeln!(out, "  {:<width$}  {}", name, value, width = width);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Predicted Revenue: {}", prediction.formatted_revenue());
    out
}
