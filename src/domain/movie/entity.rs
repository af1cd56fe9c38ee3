//! Movie attributes submitted through the form

use serde::{Deserialize, Serialize};

use super::options::{DEFAULT_V1_DIRECTOR, DEFAULT_V1_LEAD_ACTOR, DEFAULT_V1_PRIMARY_COMPANY};
use crate::domain::encoding::CategoricalField;

pub const DEFAULT_BUDGET: f64 = 100_000_000.0;
pub const DEFAULT_RELEASE_YEAR: i32 = 2023;
pub const DEFAULT_RELEASE_MONTH: u32 = 7;
pub const DEFAULT_VOTE_AVERAGE: f64 = 7.5;
pub const DEFAULT_VOTE_COUNT: u64 = 1200;
pub const DEFAULT_RUNTIME: u32 = 130;

/// Raw form values for one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    /// Production budget in USD
    pub budget: f64,
    pub release_year: i32,
    /// 1 = January
    pub release_month: u32,
    /// Average audience rating, 0-10
    pub vote_average: f64,
    pub vote_count: u64,
    /// Runtime in minutes
    pub runtime: u32,

    pub director: String,
    pub lead_actor: String,
    pub primary_company: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_country: Option<String>,
}

impl Default for MovieInput {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            release_year: DEFAULT_RELEASE_YEAR,
            release_month: DEFAULT_RELEASE_MONTH,
            vote_average: DEFAULT_VOTE_AVERAGE,
            vote_count: DEFAULT_VOTE_COUNT,
            runtime: DEFAULT_RUNTIME,
            director: DEFAULT_V1_DIRECTOR.to_string(),
            lead_actor: DEFAULT_V1_LEAD_ACTOR.to_string(),
            primary_company: DEFAULT_V1_PRIMARY_COMPANY.to_string(),
            main_genre: None,
            original_language: None,
            primary_country: None,
        }
    }
}

impl MovieInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_release(mut self, year: i32, month: u32) -> Self {
        self.release_year = year;
        self.release_month = month;
        self
    }

    pub fn with_votes(mut self, average: f64, count: u64) -> Self {
        self.vote_average = average;
        self.vote_count = count;
        self
    }

    pub fn with_runtime(mut self, runtime: u32) -> Self {
        self.runtime = runtime;
        self
    }

    /// Set a categorical attribute by field
    pub fn with_category(mut self, field: CategoricalField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            CategoricalField::Director => self.director = value,
            CategoricalField::LeadActor => self.lead_actor = value,
            CategoricalField::PrimaryCompany => self.primary_company = value,
            CategoricalField::MainGenre => self.main_genre = Some(value),
            CategoricalField::OriginalLanguage => self.original_language = Some(value),
            CategoricalField::PrimaryCountry => self.primary_country = Some(value),
        }
        self
    }

    /// Value of a categorical attribute, `None` when it was not supplied
    pub fn category(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Director => Some(&self.director),
            CategoricalField::LeadActor => Some(&self.lead_actor),
            CategoricalField::PrimaryCompany => Some(&self.primary_company),
            CategoricalField::MainGenre => self.main_genre.as_deref(),
            CategoricalField::OriginalLanguage => self.original_language.as_deref(),
            CategoricalField::PrimaryCountry => self.primary_country.as_deref(),
        }
    }
}
