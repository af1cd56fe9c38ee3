//! Infrastructure layer - Artifact loading, model implementations and observability

pub mod artifacts;
pub mod logging;
pub mod model;
pub mod observability;
