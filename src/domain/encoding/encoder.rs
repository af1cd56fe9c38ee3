//! Turns raw movie attributes into the model's feature vector

use super::feature::{log1p, FeatureVector};
use super::lookup::{LookupTable, UNKNOWN_CATEGORY_ENCODING};
use super::schema::{
    EncodingKind, SchemaRevision, LOG_BUDGET, RELEASE_MONTH, RELEASE_YEAR, RUNTIME, VOTE_AVERAGE,
    VOTE_COUNT,
};
use crate::domain::movie::MovieInput;

/// Borrowing encoder over a revision's lookup tables
#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    revision: SchemaRevision,
    frequency: &'a LookupTable,
    target: &'a LookupTable,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(
        revision: SchemaRevision,
        frequency: &'a LookupTable,
        target: &'a LookupTable,
    ) -> Self {
        Self {
            revision,
            frequency,
            target,
        }
    }

    pub fn revision(&self) -> SchemaRevision {
        self.revision
    }

    /// Build the unordered feature vector for `input`.
    ///
    /// Budget is log1p-transformed, the other numeric fields pass through, and
    /// each categorical field the revision knows is looked up in its table.
    /// Categorical fields outside the revision are ignored.
    pub fn encode(&self, input: &MovieInput) -> FeatureVector {
        let mut vector = FeatureVector::new()
            .with(LOG_BUDGET, log1p(input.budget))
            .with(RELEASE_YEAR, f64::from(input.release_year))
            .with(RELEASE_MONTH, f64::from(input.release_month))
            .with(VOTE_AVERAGE, input.vote_average)
            .with(VOTE_COUNT, input.vote_count as f64)
            .with(RUNTIME, f64::from(input.runtime));

        for field in self.revision.categorical_fields() {
            let table = match field.encoding() {
                EncodingKind::Frequency => self.frequency,
                EncodingKind::Target => self.target,
            };

            let encoded = input
                .category(*field)
                .map_or(UNKNOWN_CATEGORY_ENCODING, |value| {
                    table.encode(field.table_key(), value)
                });

            vector.insert(field.feature_name(), encoded);
        }

        vector
    }
}
