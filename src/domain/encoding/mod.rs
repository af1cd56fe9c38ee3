//! Encoding domain - Lookup tables, feature schema and vector assembly

mod encoder;
mod feature;
mod lookup;
mod schema;

pub use encoder::FeatureEncoder;
pub use feature::{expm1, log1p, FeatureOrder, FeatureVector, OrderedFeatures};
pub use lookup::{CategoryMaps, LookupTable, UNKNOWN_CATEGORY_ENCODING};
pub use schema::{
    CategoricalField, EncodingKind, SchemaRevision, LOG_BUDGET, NUMERIC_FEATURES, RELEASE_MONTH,
    RELEASE_YEAR, RUNTIME, VOTE_AVERAGE, VOTE_COUNT,
};
