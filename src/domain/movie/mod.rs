//! Movie domain - Form input, bounds and dropdown choices

mod entity;
pub mod options;
mod validation;

pub use entity::{
    MovieInput, DEFAULT_BUDGET, DEFAULT_RELEASE_MONTH, DEFAULT_RELEASE_YEAR, DEFAULT_RUNTIME,
    DEFAULT_VOTE_AVERAGE, DEFAULT_VOTE_COUNT,
};
pub use validation::{
    validate_movie_input, MovieValidationError, MAX_RELEASE_YEAR, MAX_VOTE_AVERAGE, MIN_BUDGET,
    MIN_RELEASE_YEAR, MIN_RUNTIME, MIN_VOTE_AVERAGE,
};
