//! Regression tree ensembles (gradient boosting and random forests)

use serde::{Deserialize, Serialize};

use crate::domain::prediction::check_width;
use crate::domain::{DomainError, RevenueModel};

/// Flat tree node; children are indices into the owning tree's node list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Samples with `x[feature] <= threshold` go left
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// How per-tree outputs are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Boosting: `base_score + learning_rate * sum(leaves)`
    #[default]
    Sum,
    /// Forest: `base_score + mean(leaves)`
    Mean,
}

#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Children must point strictly forward, so evaluation always terminates
    pub fn new(nodes: Vec<TreeNode>, n_features: usize) -> Result<Self, DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::configuration("regression tree has no nodes"));
        }

        for (index, node) in nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(DomainError::configuration(format!(
                            "node {} splits on feature {} but the model has {} features",
                            index, feature, n_features
                        )));
                    }

                    if threshold.is_nan() {
                        return Err(DomainError::configuration(format!(
                            "node {} has a NaN threshold",
                            index
                        )));
                    }

                    for child in [left, right] {
                        if child <= index || child >= nodes.len() {
                            return Err(DomainError::configuration(format!(
                                "node {} has invalid child index {}",
                                index, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(DomainError::configuration(format!(
                            "leaf {} has a non-finite value",
                            index
                        )));
                    }
                }
            }
        }

        Ok(Self { nodes })
    }

    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Ensemble of regression trees over a fixed feature width
#[derive(Debug, Clone)]
pub struct TreeEnsembleModel {
    n_features: usize,
    base_score: f64,
    learning_rate: f64,
    aggregation: Aggregation,
    trees: Vec<RegressionTree>,
}

impl TreeEnsembleModel {
    pub fn new(
        n_features: usize,
        base_score: f64,
        learning_rate: f64,
        aggregation: Aggregation,
        trees: Vec<RegressionTree>,
    ) -> Result<Self, DomainError> {
        if n_features == 0 {
            return Err(DomainError::configuration(
                "tree ensemble must declare at least one feature",
            ));
        }

        if trees.is_empty() {
            return Err(DomainError::configuration("tree ensemble has no trees"));
        }

        if !base_score.is_finite() || !learning_rate.is_finite() {
            return Err(DomainError::configuration(
                "tree ensemble has a non-finite base score or learning rate",
            ));
        }

        Ok(Self {
            n_features,
            base_score,
            learning_rate,
            aggregation,
            trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl RevenueModel for TreeEnsembleModel {
    fn predict(&self, features: &[f64]) -> Result<f64, DomainError> {
        check_width(self, features)?;

        let total: f64 = self.trees.iter().map(|t| t.evaluate(features)).sum();

        Ok(match self.aggregation {
            Aggregation::Sum => self.base_score + self.learning_rate * total,
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
        })
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "tree_ensemble"
    }
}
