//! Loads the trained artifacts from disk

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::ArtifactConfig;
use crate::domain::encoding::CategoryMaps;
use crate::domain::{
    ArtifactSet, DomainError, EncodingKind, FeatureOrder, LookupTable, Predictor, RevenueModel,
};
use crate::infrastructure::model::{ModelArtifact, ModelFactory};

/// Everything needed to build a [`Predictor`]
#[derive(Debug)]
pub struct LoadedArtifacts {
    pub artifacts: ArtifactSet,
    pub model: Arc<dyn RevenueModel>,
}

impl LoadedArtifacts {
    pub fn into_predictor(self) -> Result<Predictor, DomainError> {
        Predictor::new(self.artifacts, self.model)
    }
}

/// Reads model, lookup tables and feature order from an artifact directory
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    config: ArtifactConfig,
}

impl ArtifactLoader {
    pub fn new(config: ArtifactConfig) -> Self {
        Self { config }
    }

    /// Load every artifact and check it against the configured revision
    pub fn load(&self) -> Result<LoadedArtifacts, DomainError> {
        let config = &self.config;
        info!(
            dir = %config.dir.display(),
            revision = %config.revision,
            "Loading artifacts"
        );

        let model_artifact: ModelArtifact = read_json(&config.model_path())?;
        let model = ModelFactory::create(model_artifact).map_err(|e| {
            DomainError::artifact(config.model_path().display().to_string(), e.to_string())
        })?;

        let frequency: CategoryMaps = read_json(&config.frequency_maps_path())?;
        let target: CategoryMaps = read_json(&config.target_maps_path())?;
        let feature_order: FeatureOrder = read_json(&config.feature_order_path())?;

        let artifacts = ArtifactSet::new(
            config.revision,
            LookupTable::new(EncodingKind::Frequency, frequency),
            LookupTable::new(EncodingKind::Target, target),
            feature_order,
        );
        artifacts.validate()?;

        info!(
            features = artifacts.feature_order().len(),
            model = model.kind(),
            "Artifacts loaded"
        );

        Ok(LoadedArtifacts { artifacts, model })
    }

    /// Load and assemble a ready-to-use predictor
    pub fn load_predictor(&self) -> Result<Predictor, DomainError> {
        self.load()?.into_predictor()
    }
}

/// Deserialize one JSON artifact; the file handle is dropped before returning
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| DomainError::artifact(&display, e.to_string()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| DomainError::artifact(display, e.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::PathBuf;

    use serde_json::json;

    use crate::config::ArtifactConfig;
    use crate::domain::SchemaRevision;

    /// Temporary artifact directory removed on drop
    pub struct ArtifactDir {
        pub path: PathBuf,
    }

    impl ArtifactDir {
        pub fn new() -> Self {
            let path = std::env::temp_dir().join(format!(
                "box-office-artifacts-{}",
                uuid::Uuid::new_v4()
            ));
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub fn write(&self, name: &str, value: &serde_json::Value) {
            fs::write(self.path.join(name), value.to_string()).unwrap();
        }

        pub fn write_raw(&self, name: &str, contents: &str) {
            fs::write(self.path.join(name), contents).unwrap();
        }

        pub fn config(&self, revision: SchemaRevision) -> ArtifactConfig {
            ArtifactConfig {
                dir: self.path.clone(),
                revision,
                ..ArtifactConfig::default()
            }
        }
    }

    impl Drop for ArtifactDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    pub fn target_maps() -> serde_json::Value {
        json!({
            "director": {"Christopher Nolan": 4.2, "Ridley Scott": 3.1},
            "lead_actor": {"Tom Hanks": 3.3},
            "primary_company": {"Warner Bros.": 2.7}
        })
    }

    pub fn frequency_maps() -> serde_json::Value {
        json!({
            "main_genre": {"Action": 0.18, "Drama": 0.25},
            "original_language": {"English": 0.62},
            "primary_country": {"United States of America": 0.55}
        })
    }

    /// Linear model that weights only log_budget (first column) by 1.0
    pub fn budget_echo_model(width: usize) -> serde_json::Value {
        let mut coefficients = vec![0.0; width];
        coefficients[0] = 1.0;
        json!({"kind": "linear", "intercept": 0.0, "coefficients": coefficients})
    }

    /// A complete, valid artifact directory for `revision`
    pub fn artifact_dir(revision: SchemaRevision) -> ArtifactDir {
        let dir = ArtifactDir::new();
        let order = revision.feature_names();

        dir.write("model.json", &budget_echo_model(order.len()));
        dir.write("feature_order.json", &json!(order));
        dir.write("target_maps.json", &target_maps());
        match revision {
            SchemaRevision::V1 => dir.write("freq_maps.json", &json!({})),
            SchemaRevision::V2 => dir.write("freq_maps.json", &frequency_maps()),
        }

        dir
    }
}
