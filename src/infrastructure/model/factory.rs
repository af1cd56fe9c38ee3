use std::sync::Arc;

use serde::Deserialize;

use super::linear::LinearModel;
use super::tree_ensemble::{Aggregation, RegressionTree, TreeEnsembleModel, TreeNode};
use crate::domain::{DomainError, RevenueModel};

/// On-disk model artifact
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    TreeEnsemble {
        n_features: usize,
        #[serde(default)]
        base_score: f64,
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
        #[serde(default)]
        aggregation: Aggregation,
        trees: Vec<TreeArtifact>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

fn default_learning_rate() -> f64 {
    1.0
}

/// Factory for building revenue models from artifacts
#[derive(Debug)]
pub struct ModelFactory;

impl ModelFactory {
    /// Validate an artifact and turn it into a shareable model
    pub fn create(artifact: ModelArtifact) -> Result<Arc<dyn RevenueModel>, DomainError> {
        match artifact {
            ModelArtifact::Linear {
                intercept,
                coefficients,
            } => Ok(Arc::new(LinearModel::new(intercept, coefficients)?)),

            ModelArtifact::TreeEnsemble {
                n_features,
                base_score,
                learning_rate,
                aggregation,
                trees,
            } => {
                let trees = trees
                    .into_iter()
                    .enumerate()
                    .map(|(i, tree)| {
                        RegressionTree::new(tree.nodes, n_features).map_err(|e| {
                            DomainError::configuration(format!("tree {}: {}", i, e))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Arc::new(TreeEnsembleModel::new(
                    n_features,
                    base_score,
                    learning_rate,
                    aggregation,
                    trees,
                )?))
            }
        }
    }
}
