//! Form schema served to the UI so it can render the right widgets

use serde::{Deserialize, Serialize};

use crate::domain::movie::{self, options};
use crate::domain::{CategoricalField, EncodingKind, FeatureOrder, SchemaRevision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Number,
    Text,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    SingleColumn,
    TwoColumn,
}

/// Numeric stepper (or the month dropdown)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericFieldSpec {
    pub name: String,
    pub label: String,
    pub input: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalFieldSpec {
    pub name: String,
    pub label: String,
    pub encoding: EncodingKind,
    pub input: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthOption {
    pub name: String,
    pub number: u32,
}

/// GET /v1/form response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchemaResponse {
    pub revision: SchemaRevision,
    pub layout: Layout,
    pub numeric_fields: Vec<NumericFieldSpec>,
    pub categorical_fields: Vec<CategoricalFieldSpec>,
    pub months: Vec<MonthOption>,
    pub feature_order: Vec<String>,
}

impl FormSchemaResponse {
    pub fn for_revision(revision: SchemaRevision, feature_order: &FeatureOrder) -> Self {
        let dropdowns = revision.uses_dropdowns();

        let month_input = if dropdowns {
            InputKind::Select
        } else {
            InputKind::Number
        };

        let numeric_fields = vec![
            numeric(
                "budget",
                "Budget (USD)",
                InputKind::Number,
                Some(movie::MIN_BUDGET),
                None,
                1_000_000.0,
                movie::DEFAULT_BUDGET,
            ),
            numeric(
                "release_year",
                "Release Year",
                InputKind::Number,
                Some(f64::from(movie::MIN_RELEASE_YEAR)),
                Some(f64::from(movie::MAX_RELEASE_YEAR)),
                1.0,
                f64::from(movie::DEFAULT_RELEASE_YEAR),
            ),
            numeric(
                "release_month",
                "Release Month",
                month_input,
                Some(1.0),
                Some(12.0),
                1.0,
                f64::from(movie::DEFAULT_RELEASE_MONTH),
            ),
            numeric(
                "vote_average",
                "Average Rating",
                InputKind::Number,
                Some(movie::MIN_VOTE_AVERAGE),
                Some(movie::MAX_VOTE_AVERAGE),
                0.1,
                movie::DEFAULT_VOTE_AVERAGE,
            ),
            numeric(
                "vote_count",
                "Vote Count",
                InputKind::Number,
                Some(0.0),
                None,
                10.0,
                movie::DEFAULT_VOTE_COUNT as f64,
            ),
            numeric(
                "runtime",
                "Runtime (minutes)",
                InputKind::Number,
                Some(f64::from(movie::MIN_RUNTIME)),
                None,
                1.0,
                f64::from(movie::DEFAULT_RUNTIME),
            ),
        ];

        let categorical_fields = revision
            .categorical_fields()
            .iter()
            .map(|field| categorical(revision, *field))
            .collect();

        let months = options::MONTH_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| MonthOption {
                name: name.to_string(),
                number: i as u32 + 1,
            })
            .collect();

        Self {
            revision,
            layout: if dropdowns {
                Layout::TwoColumn
            } else {
                Layout::SingleColumn
            },
            numeric_fields,
            categorical_fields,
            months,
            feature_order: feature_order.names().to_vec(),
        }
    }
}

fn numeric(
    name: &str,
    label: &str,
    input: InputKind,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    default: f64,
) -> NumericFieldSpec {
    NumericFieldSpec {
        name: name.to_string(),
        label: label.to_string(),
        input,
        min,
        max,
        step,
        default,
    }
}

fn categorical(revision: SchemaRevision, field: CategoricalField) -> CategoricalFieldSpec {
    let (input, choices) = if revision.uses_dropdowns() {
        let choices = options::choices(field)
            .iter()
            .map(|c| c.to_string())
            .collect();
        (InputKind::Select, Some(choices))
    } else {
        (InputKind::Text, None)
    };

    CategoricalFieldSpec {
        name: field.table_key().to_string(),
        label: field.label().to_string(),
        encoding: field.encoding(),
        input,
        options: choices,
        default: options::default_choice(revision, field).to_string(),
    }
}
