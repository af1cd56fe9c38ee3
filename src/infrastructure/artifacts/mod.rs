//! Artifact loading from the filesystem

mod loader;

pub use loader::{ArtifactLoader, LoadedArtifacts};

#[cfg(test)]
pub(crate) use loader::fixtures;
