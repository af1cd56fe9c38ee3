use crate::domain::prediction::check_width;
use crate::domain::{DomainError, RevenueModel};

/// Ordinary least squares style regressor: `intercept + w · x`
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, DomainError> {
        if coefficients.is_empty() {
            return Err(DomainError::configuration(
                "linear model has no coefficients",
            ));
        }

        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(DomainError::configuration(
                "linear model contains non-finite parameters",
            ));
        }

        Ok(Self {
            intercept,
            coefficients,
        })
    }
}

impl RevenueModel for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, DomainError> {
        check_width(self, features)?;

        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
