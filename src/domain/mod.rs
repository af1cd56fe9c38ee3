//! Domain layer - Core business logic and entities

pub mod encoding;
pub mod error;
pub mod movie;
pub mod prediction;

pub use encoding::{
    CategoricalField, EncodingKind, FeatureEncoder, FeatureOrder, FeatureVector, LookupTable,
    OrderedFeatures, SchemaRevision, UNKNOWN_CATEGORY_ENCODING,
};
pub use error::DomainError;
pub use movie::{validate_movie_input, MovieInput, MovieValidationError};
pub use prediction::{format_revenue, ArtifactSet, Prediction, Predictor, RevenueModel};
