//! Inspect command - loads an artifact directory and reports what it holds

use std::fmt::Write as _;

use clap::Args;

use super::ArtifactArgs;
use crate::domain::LookupTable;
use crate::infrastructure::artifacts::{ArtifactLoader, LoadedArtifacts};
use crate::infrastructure::logging::LogTarget;

#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

/// Validate the artifacts; any problem surfaces as an error and a non-zero exit
pub async fn run(args: InspectArgs) -> anyhow::Result<()> {
    let mut config = super::load_config()?;
    args.artifacts.apply(&mut config);
    super::init_logging(&config, LogTarget::Stderr);

    let loaded = ArtifactLoader::new(config.artifacts.clone()).load()?;
    let report = render_report(&loaded);

    // width check against the feature order
    loaded.into_predictor()?;

    print!("{}", report);
    Ok(())
}

fn render_report(loaded: &LoadedArtifacts) -> String {
    let artifacts = &loaded.artifacts;
    let mut out = String::new();

    let _ = writeln!(out, "Schema revision: {}", artifacts.revision());
    let _ = writeln!(
        out,
        "Model: {} ({} features)",
        loaded.model.kind(),
        loaded.model.n_features()
    );

    let _ = writeln!(out, "Feature order:");
    for (i, name) in artifacts.feature_order().names().iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", i, name);
    }

    write_table(&mut out, artifacts.frequency());
    write_table(&mut out, artifacts.target());

    out
}

fn write_table(out: &mut String, table: &LookupTable) {
    let fields = table.field_names();

    let _ = writeln!(out, "{} maps:", table.kind());
    if fields.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for field in fields {
        let _ = writeln!(out, "  {}: {} categories", field, table.category_count(field));
    }
}
