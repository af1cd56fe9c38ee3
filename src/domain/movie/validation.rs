//! Movie input validation utilities

use std::fmt;

use super::entity::MovieInput;
use crate::domain::DomainError;

pub const MIN_BUDGET: f64 = 1_000.0;
pub const MIN_RELEASE_YEAR: i32 = 1900;
pub const MAX_RELEASE_YEAR: i32 = 2100;
pub const MIN_VOTE_AVERAGE: f64 = 0.0;
pub const MAX_VOTE_AVERAGE: f64 = 10.0;
pub const MIN_RUNTIME: u32 = 1;

/// Movie input validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum MovieValidationError {
    /// Budget below the minimum or not a finite number
    InvalidBudget { value: f64, min: f64 },
    /// Release year outside the supported range
    InvalidReleaseYear { value: i32, min: i32, max: i32 },
    /// Release month not in 1..=12
    InvalidReleaseMonth { value: u32 },
    /// Rating outside 0-10 or not a finite number
    InvalidVoteAverage { value: f64, min: f64, max: f64 },
    /// Runtime of zero minutes
    InvalidRuntime { value: u32, min: u32 },
}

impl MovieValidationError {
    /// Input field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidBudget { .. } => "budget",
            Self::InvalidReleaseYear { .. } => "release_year",
            Self::InvalidReleaseMonth { .. } => "release_month",
            Self::InvalidVoteAverage { .. } => "vote_average",
            Self::InvalidRuntime { .. } => "runtime",
        }
    }
}

impl fmt::Display for MovieValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBudget { value, min } => {
                write!(f, "Invalid budget {}: must be a number of at least {}", value, min)
            }
            Self::InvalidReleaseYear { value, min, max } => {
                write!(
                    f,
                    "Invalid release_year {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidReleaseMonth { value } => {
                write!(f, "Invalid release_month {}: must be between 1 and 12", value)
            }
            Self::InvalidVoteAverage { value, min, max } => {
                write!(
                    f,
                    "Invalid vote_average {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidRuntime { value, min } => {
                write!(f, "Invalid runtime {}: must be at least {} minute", value, min)
            }
        }
    }
}

impl std::error::Error for MovieValidationError {}

impl From<MovieValidationError> for DomainError {
    fn from(err: MovieValidationError) -> Self {
        DomainError::invalid_field(err.field(), err.to_string())
    }
}

pub fn validate_budget(budget: f64) -> Result<(), MovieValidationError> {
    if !budget.is_finite() || budget < MIN_BUDGET {
        return Err(MovieValidationError::InvalidBudget {
            value: budget,
            min: MIN_BUDGET,
        });
    }

    Ok(())
}

pub fn validate_release_year(year: i32) -> Result<(), MovieValidationError> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(MovieValidationError::InvalidReleaseYear {
            value: year,
            min: MIN_RELEASE_YEAR,
            max: MAX_RELEASE_YEAR,
        });
    }

    Ok(())
}

pub fn validate_release_month(month: u32) -> Result<(), MovieValidationError> {
    if !(1..=12).contains(&month) {
        return Err(MovieValidationError::InvalidReleaseMonth { value: month });
    }

    Ok(())
}

pub fn validate_vote_average(rating: f64) -> Result<(), MovieValidationError> {
    // NaN fails the range check as well
    if !(MIN_VOTE_AVERAGE..=MAX_VOTE_AVERAGE).contains(&rating) {
        return Err(MovieValidationError::InvalidVoteAverage {
            value: rating,
            min: MIN_VOTE_AVERAGE,
            max: MAX_VOTE_AVERAGE,
        });
    }

    Ok(())
}

pub fn validate_runtime(runtime: u32) -> Result<(), MovieValidationError> {
    if runtime < MIN_RUNTIME {
        return Err(MovieValidationError::InvalidRuntime {
            value: runtime,
            min: MIN_RUNTIME,
        });
    }

    Ok(())
}

/// Validate every bounded numeric field of a movie input.
///
/// Categorical values are never rejected; unknown ones fall back to the
/// default encoding.
pub fn validate_movie_input(input: &MovieInput) -> Result<(), MovieValidationError> {
    validate_budget(input.budget)?;
    validate_release_year(input.release_year)?;
    validate_release_month(input.release_month)?;
    validate_vote_average(input.vote_average)?;
    validate_runtime(input.runtime)?;

    Ok(())
}
