//! Feature schema revisions
//!
//! A revision fixes which features the model was trained on. V1 encodes the
//! director, lead actor and production company with target encoding; V2 adds
//! frequency-encoded genre, language and country. Artifacts produced for one
//! revision cannot be used with the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const LOG_BUDGET: &str = "log_budget";
pub const RELEASE_YEAR: &str = "release_year";
pub const RELEASE_MONTH: &str = "release_month";
pub const VOTE_AVERAGE: &str = "vote_average";
pub const VOTE_COUNT: &str = "vote_count";
pub const RUNTIME: &str = "runtime";

/// Numeric features shared by every revision, in definition order
pub const NUMERIC_FEATURES: [&str; 6] = [
    LOG_BUDGET,
    RELEASE_YEAR,
    RELEASE_MONTH,
    VOTE_AVERAGE,
    VOTE_COUNT,
    RUNTIME,
];

const V1_CATEGORICAL: [CategoricalField; 3] = [
    CategoricalField::Director,
    CategoricalField::LeadActor,
    CategoricalField::PrimaryCompany,
];

const V2_CATEGORICAL: [CategoricalField; 6] = [
    CategoricalField::MainGenre,
    CategoricalField::OriginalLanguage,
    CategoricalField::PrimaryCountry,
    CategoricalField::Director,
    CategoricalField::LeadActor,
    CategoricalField::PrimaryCompany,
];

/// Which lookup table a categorical field is encoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingKind {
    Frequency,
    Target,
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Categorical movie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    MainGenre,
    OriginalLanguage,
    PrimaryCountry,
    Director,
    LeadActor,
    PrimaryCompany,
}

impl CategoricalField {
    /// Key of this field inside its lookup table
    pub fn table_key(&self) -> &'static str {
        match self {
            Self::MainGenre => "main_genre",
            Self::OriginalLanguage => "original_language",
            Self::PrimaryCountry => "primary_country",
            Self::Director => "director",
            Self::LeadActor => "lead_actor",
            Self::PrimaryCompany => "primary_company",
        }
    }

    /// Column name the model sees
    pub fn feature_name(&self) -> &'static str {
        match self {
            Self::MainGenre => "main_genre_freq_enc",
            Self::OriginalLanguage => "original_language_freq_enc",
            Self::PrimaryCountry => "primary_country_freq_enc",
            Self::Director => "director_target_enc",
            Self::LeadActor => "lead_actor_target_enc",
            Self::PrimaryCompany => "primary_company_target_enc",
        }
    }

    pub fn encoding(&self) -> EncodingKind {
        match self {
            Self::MainGenre | Self::OriginalLanguage | Self::PrimaryCountry => {
                EncodingKind::Frequency
            }
            Self::Director | Self::LeadActor | Self::PrimaryCompany => EncodingKind::Target,
        }
    }

    /// Human readable form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::MainGenre => "Main Genre",
            Self::OriginalLanguage => "Original Language",
            Self::PrimaryCountry => "Primary Country",
            Self::Director => "Director",
            Self::LeadActor => "Lead Actor",
            Self::PrimaryCompany => "Primary Production Company",
        }
    }
}

/// Feature schema revision of a loaded artifact set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaRevision {
    V1,
    #[default]
    V2,
}

impl SchemaRevision {
    /// Categorical fields this revision encodes, in definition order
    pub fn categorical_fields(&self) -> &'static [CategoricalField] {
        match self {
            Self::V1 => &V1_CATEGORICAL,
            Self::V2 => &V2_CATEGORICAL,
        }
    }

    /// All feature names in definition order (numeric first, then categorical)
    pub fn feature_names(&self) -> Vec<&'static str> {
        NUMERIC_FEATURES
            .iter()
            .copied()
            .chain(self.categorical_fields().iter().map(|f| f.feature_name()))
            .collect()
    }

    /// Table keys a lookup table of the given kind must provide
    pub fn required_table_keys(&self, kind: EncodingKind) -> Vec<&'static str> {
        self.categorical_fields()
            .iter()
            .filter(|f| f.encoding() == kind)
            .map(|f| f.table_key())
            .collect()
    }

    pub fn uses_dropdowns(&self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for SchemaRevision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(format!("unknown schema revision '{}'", other)),
        }
    }
}
