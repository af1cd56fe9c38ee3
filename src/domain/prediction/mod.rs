//! Prediction domain - Model abstraction, artifact set and the predictor

mod artifacts;
mod format;
mod model;
mod predictor;

pub use artifacts::ArtifactSet;
pub use format::format_revenue;
pub use model::{check_width, RevenueModel};
pub use predictor::{Prediction, Predictor};

#[cfg(test)]
pub use model::MockRevenueModel;
