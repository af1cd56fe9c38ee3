//! Feature order, feature vectors and the log transforms

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// `ln(1 + x)`, used to compress budgets before they reach the model
pub fn log1p(value: f64) -> f64 {
    value.ln_1p()
}

/// `exp(x) - 1`, the inverse of [`log1p`], used to restore revenue
pub fn expm1(value: f64) -> f64 {
    value.exp_m1()
}

/// Column order the model was trained with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureOrder(Vec<String>);

impl FeatureOrder {
    pub fn new(names: Vec<String>) -> Result<Self, DomainError> {
        if names.is_empty() {
            return Err(DomainError::configuration("feature order is empty"));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(DomainError::configuration(format!(
                    "feature order lists '{}' more than once",
                    name
                )));
            }
        }

        Ok(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare against an expected name set; returns (missing, unexpected), both sorted
    pub fn diff<'a>(&self, expected: impl IntoIterator<Item = &'a str>) -> (Vec<String>, Vec<String>) {
        let expected: HashSet<&str> = expected.into_iter().collect();
        let actual: HashSet<&str> = self.0.iter().map(String::as_str).collect();

        let mut missing: Vec<String> = expected
            .difference(&actual)
            .map(|s| s.to_string())
            .collect();
        let mut unexpected: Vec<String> = actual
            .difference(&expected)
            .map(|s| s.to_string())
            .collect();

        missing.sort();
        unexpected.sort();
        (missing, unexpected)
    }

    /// Reorder `vector` into this order.
    ///
    /// The vector's keys must be exactly the names of this order; anything else
    /// means the artifacts and the encoder disagree about the feature schema.
    pub fn arrange(&self, vector: &FeatureVector) -> Result<OrderedFeatures, DomainError> {
        // diff() treats the vector as the expected set, so the halves swap here
        let (unexpected, missing) = self.diff(vector.names());

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(DomainError::feature_mismatch(missing, unexpected));
        }

        let values = self
            .0
            .iter()
            .map(|name| vector.get(name).unwrap_or_default())
            .collect();

        Ok(OrderedFeatures {
            names: self.0.clone(),
            values,
        })
    }
}

impl TryFrom<Vec<String>> for FeatureOrder {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeatureOrder> for Vec<String> {
    fn from(order: FeatureOrder) -> Self {
        order.0
    }
}

/// Single-row feature mapping assembled per prediction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: HashMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Feature values laid out in model column order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedFeatures {
    names: Vec<String>,
    values: Vec<f64>,
}

impl OrderedFeatures {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// (name, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn order(names: &[&str]) -> FeatureOrder {
        FeatureOrder::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_log_round_trip() {
        for x in [0.0, 1.0, 1000.0, 1.0e8, 2.5e9, 1.0e-9] {
            assert_relative_eq!(expm1(log1p(x)), x, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_log1p_of_budget() {
        assert_relative_eq!(log1p(1.0e8), 18.420680753952364, epsilon = 1e-9);
        assert_eq!(log1p(0.0), 0.0);
    }

    #[test]
    fn test_feature_order_rejects_duplicates() {
        let result = FeatureOrder::new(vec!["runtime".to_string(), "runtime".to_string()]);
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_feature_order_rejects_empty() {
        assert!(FeatureOrder::new(Vec::new()).is_err());
    }

    #[test]
    fn test_arrange_reorders_values() {
        let order = order(&["runtime", "log_budget", "vote_count"]);
        let vector = FeatureVector::new()
            .with("log_budget", 18.4)
            .with("vote_count", 1200.0)
            .with("runtime", 130.0);

        let arranged = order.arrange(&vector).unwrap();
        assert_eq!(arranged.names(), &["runtime", "log_budget", "vote_count"]);
        assert_eq!(arranged.values(), &[130.0, 18.4, 1200.0]);
        assert_eq!(arranged.get("vote_count"), Some(1200.0));
    }

    #[test]
    fn test_arrange_reports_missing_and_unexpected() {
        let order = order(&["runtime", "log_budget"]);
        let vector = FeatureVector::new()
            .with("runtime", 130.0)
            .with("budget", 1.0e8);

        match order.arrange(&vector) {
            Err(DomainError::FeatureMismatch {
                missing,
                unexpected,
            }) => {
                assert_eq!(missing, vec!["log_budget"]);
                assert_eq!(unexpected, vec!["budget"]);
            }
            other => panic!("expected feature mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_feature_order_deserializes_from_list() {
        let order: FeatureOrder = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(order.len(), 2);

        let duplicate: Result<FeatureOrder, _> = serde_json::from_str(r#"["a", "a"]"#);
        assert!(duplicate.is_err());
    }
}
