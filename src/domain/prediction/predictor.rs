//! Encoder + model glue

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::artifacts::ArtifactSet;
use super::format::format_revenue;
use super::model::{check_width, RevenueModel};
use crate::domain::encoding::{expm1, OrderedFeatures, SchemaRevision};
use crate::domain::movie::{validate_movie_input, MovieInput};
use crate::domain::DomainError;

/// Result of a single prediction
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub revision: SchemaRevision,
    /// Raw model output
    pub log_revenue: f64,
    /// `expm1(log_revenue)`, in currency units
    pub revenue: f64,
    /// Feature row exactly as passed to the model
    pub features: OrderedFeatures,
}

impl Prediction {
    pub fn formatted_revenue(&self) -> String {
        format_revenue(self.revenue)
    }
}

/// Immutable predictor shared by every request
#[derive(Debug)]
pub struct Predictor {
    artifacts: ArtifactSet,
    model: Arc<dyn RevenueModel>,
}

impl Predictor {
    /// Build a predictor after checking the artifacts and model agree
    pub fn new(artifacts: ArtifactSet, model: Arc<dyn RevenueModel>) -> Result<Self, DomainError> {
        artifacts.validate()?;

        let width = artifacts.feature_order().len();
        if model.n_features() != width {
            return Err(DomainError::configuration(format!(
                "{} model takes {} features but the feature order lists {}",
                model.kind(),
                model.n_features(),
                width
            )));
        }

        info!(
            revision = %artifacts.revision(),
            features = width,
            model = model.kind(),
            "Predictor ready"
        );

        Ok(Self { artifacts, model })
    }

    pub fn revision(&self) -> SchemaRevision {
        self.artifacts.revision()
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    pub fn model_kind(&self) -> &'static str {
        self.model.kind()
    }

    /// Encode and arrange `input` without running the model
    pub fn features(&self, input: &MovieInput) -> Result<OrderedFeatures, DomainError> {
        validate_movie_input(input)?;

        let vector = self.artifacts.encoder().encode(input);
        self.artifacts.feature_order().arrange(&vector)
    }

    /// Run one prediction end to end
    pub fn predict(&self, input: &MovieInput) -> Result<Prediction, DomainError> {
        let features = self.features(input)?;

        check_width(self.model.as_ref(), features.values())?;
        let log_revenue = self.model.predict(features.values())?;

        if !log_revenue.is_finite() {
            return Err(DomainError::inference(format!(
                "model returned a non-finite prediction ({})",
                log_revenue
            )));
        }

        let revenue = expm1(log_revenue);
        if !revenue.is_finite() {
            return Err(DomainError::inference(format!(
                "log revenue {} is too large to convert back to currency",
                log_revenue
            )));
        }

        debug!(
            revision = %self.revision(),
            log_revenue = log_revenue,
            revenue = revenue,
            "Prediction complete"
        );

        Ok(Prediction {
            revision: self.revision(),
            log_revenue,
            revenue,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_relative_eq;

    use super::*;
    use crate::domain::encoding::{
        log1p, CategoricalField, EncodingKind, FeatureOrder, LookupTable,
    };
    use crate::domain::prediction::model::MockRevenueModel;

    fn target_table() -> LookupTable {
        LookupTable::new(
            EncodingKind::Target,
            HashMap::from([
                (
                    "director".to_string(),
                    HashMap::from([("Christopher Nolan".to_string(), 4.2)]),
                ),
                ("lead_actor".to_string(), HashMap::new()),
                ("primary_company".to_string(), HashMap::new()),
            ]),
        )
    }

    fn frequency_table() -> LookupTable {
        LookupTable::new(
            EncodingKind::Frequency,
            HashMap::from([
                (
                    "main_genre".to_string(),
                    HashMap::from([("Action".to_string(), 0.18)]),
                ),
                (
                    "original_language".to_string(),
                    HashMap::from([("English".to_string(), 0.62)]),
                ),
                (
                    "primary_country".to_string(),
                    HashMap::from([("United States of America".to_string(), 0.55)]),
                ),
            ]),
        )
    }

    /// Training order differs from definition order on purpose
    fn v1_order() -> FeatureOrder {
        FeatureOrder::new(
            [
                "director_target_enc",
                "log_budget",
                "release_year",
                "release_month",
                "vote_average",
                "vote_count",
                "runtime",
                "lead_actor_target_enc",
                "primary_company_target_enc",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
    }

    fn v2_order() -> FeatureOrder {
        let names = SchemaRevision::V2
            .feature_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        FeatureOrder::new(names).unwrap()
    }

    fn mock_model(width: usize, output: f64) -> MockRevenueModel {
        let mut model = MockRevenueModel::new();
        model.expect_n_features().return_const(width);
        model.expect_kind().return_const("mock");
        model.expect_predict().returning(move |_| Ok(output));
        model
    }

    fn v1_predictor(model: MockRevenueModel) -> Predictor {
        let artifacts = ArtifactSet::new(
            SchemaRevision::V1,
            LookupTable::empty(EncodingKind::Frequency),
            target_table(),
            v1_order(),
        );
        Predictor::new(artifacts, Arc::new(model)).unwrap()
    }

    #[test]
    fn test_v1_end_to_end() {
        let mut model = MockRevenueModel::new();
        model.expect_n_features().return_const(9usize);
        model.expect_kind().return_const("mock");
        model
            .expect_predict()
            .withf(|features: &[f64]| {
                features.len() == 9
                    && features[0] == 4.2
                    && (features[1] - log1p(1.0e8)).abs() < 1e-12
                    && features[2] == 2023.0
                    && features[7] == 0.0
                    && features[8] == 0.0
            })
            .times(1)
            .returning(|_| Ok(log1p(250_000_000.0)));

        let predictor = v1_predictor(model);
        let input = MovieInput::default()
            .with_category(CategoricalField::LeadActor, "Unmapped Actor")
            .with_category(CategoricalField::PrimaryCompany, "Unmapped Studio");

        let prediction = predictor.predict(&input).unwrap();

        assert_eq!(prediction.revision, SchemaRevision::V1);
        assert_relative_eq!(prediction.revenue, 250_000_000.0, max_relative = 1e-9);
        assert_eq!(prediction.formatted_revenue(), "$250,000,000.00");
        assert_eq!(prediction.features.names()[0], "director_target_enc");
        assert_eq!(prediction.features.get("lead_actor_target_enc"), Some(0.0));
    }

    #[test]
    fn test_v2_end_to_end() {
        let artifacts = ArtifactSet::new(
            SchemaRevision::V2,
            frequency_table(),
            target_table(),
            v2_order(),
        );
        let predictor = Predictor::new(artifacts, Arc::new(mock_model(12, 17.0))).unwrap();

        let input = MovieInput::default()
            .with_category(CategoricalField::MainGenre, "Action")
            .with_category(CategoricalField::OriginalLanguage, "English")
            .with_category(CategoricalField::PrimaryCountry, "United States of America");

        let prediction = predictor.predict(&input).unwrap();
        let features = &prediction.features;

        assert_eq!(features.values().len(), 12);
        assert_eq!(features.get("main_genre_freq_enc"), Some(0.18));
        assert_eq!(features.get("original_language_freq_enc"), Some(0.62));
        assert_eq!(features.get("primary_country_freq_enc"), Some(0.55));
        assert_eq!(features.get("director_target_enc"), Some(4.2));
        assert_relative_eq!(prediction.revenue, 17.0_f64.exp_m1(), max_relative = 1e-12);
    }

    #[test]
    fn test_model_width_mismatch_rejected() {
        let artifacts = ArtifactSet::new(
            SchemaRevision::V1,
            LookupTable::empty(EncodingKind::Frequency),
            target_table(),
            v1_order(),
        );

        let result = Predictor::new(artifacts, Arc::new(mock_model(12, 0.0)));
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_invalid_input_never_reaches_model() {
        let mut model = MockRevenueModel::new();
        model.expect_n_features().return_const(9usize);
        model.expect_kind().return_const("mock");
        model.expect_predict().never();

        let predictor = v1_predictor(model);
        let input = MovieInput::default().with_budget(10.0);

        assert!(matches!(
            predictor.predict(&input),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_non_finite_output_rejected() {
        let predictor = v1_predictor(mock_model(9, f64::NAN));
        assert!(matches!(
            predictor.predict(&MovieInput::default()),
            Err(DomainError::Inference { .. })
        ));

        let predictor = v1_predictor(mock_model(9, 1.0e6));
        assert!(matches!(
            predictor.predict(&MovieInput::default()),
            Err(DomainError::Inference { .. })
        ));
    }

    #[test]
    fn test_model_error_propagates() {
        let mut model = MockRevenueModel::new();
        model.expect_n_features().return_const(9usize);
        model.expect_kind().return_const("mock");
        model
            .expect_predict()
            .returning(|_| Err(DomainError::inference("boom")));

        let predictor = v1_predictor(model);
        let err = predictor.predict(&MovieInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "Inference error: boom");
    }
}
