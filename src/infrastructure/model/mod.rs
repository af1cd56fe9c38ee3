//! Revenue model implementations

mod factory;
mod linear;
mod tree_ensemble;

pub use factory::{ModelArtifact, ModelFactory, TreeArtifact};
pub use linear::LinearModel;
pub use tree_ensemble::{Aggregation, RegressionTree, TreeEnsembleModel, TreeNode};
