use std::fmt::Debug;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Trait for pre-trained revenue regressors
///
/// Implementations take features in the artifact set's column order and
/// return a prediction in log-revenue space.
#[cfg_attr(test, automock)]
pub trait RevenueModel: Send + Sync + Debug {
    /// Predict log revenue for one row of features
    fn predict(&self, features: &[f64]) -> Result<f64, DomainError>;

    /// Number of input columns the model was trained on
    fn n_features(&self) -> usize;

    /// Short model family name, e.g. "linear"
    fn kind(&self) -> &'static str;
}

/// Reject rows whose width differs from what the model expects
pub fn check_width(model: &dyn RevenueModel, features: &[f64]) -> Result<(), DomainError> {
    if features.len() != model.n_features() {
        return Err(DomainError::inference(format!(
            "{} model expects {} features, got {}",
            model.kind(),
            model.n_features(),
            features.len()
        )));
    }

    Ok(())
}
