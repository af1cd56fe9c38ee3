//! Prediction request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{MovieInput, Prediction, SchemaRevision};

/// POST /v1/predict body
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub movie: MovieInput,

    /// Echo the encoded feature row back (the form's debug panel)
    #[serde(default)]
    pub include_features: bool,
}

/// One encoded column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub name: String,
    pub value: f64,
}

/// POST /v1/predict response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub revenue: f64,
    pub formatted_revenue: String,
    pub log_revenue: f64,
    pub revision: SchemaRevision,
    pub predicted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureValue>>,
}

impl PredictResponse {
    pub fn from_domain(prediction: &Prediction, include_features: bool) -> Self {
        let features = include_features.then(|| {
            prediction
                .features
                .iter()
                .map(|(name, value)| FeatureValue {
                    name: name.to_string(),
                    value,
                })
                .collect()
        });

        Self {
            revenue: prediction.revenue,
            formatted_revenue: prediction.formatted_revenue(),
            log_revenue: prediction.log_revenue,
            revision: prediction.revision,
            predicted_at: Utc::now(),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_flattens_movie() {
        let json = r#"{
            "budget": 100000000,
            "release_year": 2023,
            "release_month": 7,
            "vote_average": 7.5,
            "vote_count": 1200,
            "runtime": 130,
            "director": "Christopher Nolan",
            "lead_actor": "Cillian Murphy",
            "primary_company": "Universal Pictures",
            "main_genre": "Action",
            "include_features": true
        }"#;

        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert!(request.include_features);
        assert_eq!(request.movie.budget, 100_000_000.0);
        assert_eq!(request.movie.main_genre.as_deref(), Some("Action"));
        assert_eq!(request.movie.primary_country, None);
    }

    #[test]
    fn test_include_features_defaults_to_false() {
        let json = r#"{
            "budget": 2000000, "release_year": 2001, "release_month": 1,
            "vote_average": 5.0, "vote_count": 3, "runtime": 88,
            "director": "Other", "lead_actor": "Other", "primary_company": "Other"
        }"#;

        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert!(!request.include_features);
    }
}
