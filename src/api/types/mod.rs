//! Request and response types

pub mod error;
pub mod form;
pub mod json;
pub mod prediction;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use form::{CategoricalFieldSpec, FormSchemaResponse, InputKind, Layout, NumericFieldSpec};
pub use json::Json;
pub use prediction::{FeatureValue, PredictRequest, PredictResponse};
