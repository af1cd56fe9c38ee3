//! The set of static lookup artifacts a predictor is built from

use crate::domain::encoding::{
    EncodingKind, FeatureEncoder, FeatureOrder, LookupTable, SchemaRevision,
};
use crate::domain::DomainError;

/// Lookup tables and column order produced by one training run.
///
/// The revision is declared by configuration and checked against the tables
/// and order by [`ArtifactSet::validate`], so V1 artifacts can never be used
/// with the V2 encoder or the other way around.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    revision: SchemaRevision,
    frequency: LookupTable,
    target: LookupTable,
    feature_order: FeatureOrder,
}

impl ArtifactSet {
    pub fn new(
        revision: SchemaRevision,
        frequency: LookupTable,
        target: LookupTable,
        feature_order: FeatureOrder,
    ) -> Self {
        Self {
            revision,
            frequency,
            target,
            feature_order,
        }
    }

    pub fn revision(&self) -> SchemaRevision {
        self.revision
    }

    pub fn frequency(&self) -> &LookupTable {
        &self.frequency
    }

    pub fn target(&self) -> &LookupTable {
        &self.target
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        &self.feature_order
    }

    pub fn encoder(&self) -> FeatureEncoder<'_> {
        FeatureEncoder::new(self.revision, &self.frequency, &self.target)
    }

    /// Check that the tables and feature order belong to the declared revision
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.frequency.kind() != EncodingKind::Frequency {
            return Err(DomainError::configuration(
                "frequency maps were loaded as a target encoding table",
            ));
        }

        if self.target.kind() != EncodingKind::Target {
            return Err(DomainError::configuration(
                "target maps were loaded as a frequency encoding table",
            ));
        }

        let (missing, unexpected) = self
            .feature_order
            .diff(self.revision.feature_names());

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(DomainError::configuration(format!(
                "feature order does not match schema {}: missing [{}], unexpected [{}]",
                self.revision,
                missing.join(", "),
                unexpected.join(", ")
            )));
        }

        self.frequency
            .require_fields(&self.revision.required_table_keys(EncodingKind::Frequency))?;
        self.target
            .require_fields(&self.revision.required_table_keys(EncodingKind::Target))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn table(kind: EncodingKind, fields: &[&str]) -> LookupTable {
        let maps = fields
            .iter()
            .map(|f| (f.to_string(), HashMap::from([("Other".to_string(), 0.1)])))
            .collect();
        LookupTable::new(kind, maps)
    }

    fn order(revision: SchemaRevision) -> FeatureOrder {
        let mut names: Vec<String> = revision
            .feature_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.reverse();
        FeatureOrder::new(names).unwrap()
    }

    fn v1_set() -> ArtifactSet {
        ArtifactSet::new(
            SchemaRevision::V1,
            LookupTable::empty(EncodingKind::Frequency),
            table(
                EncodingKind::Target,
                &["director", "lead_actor", "primary_company"],
            ),
            order(SchemaRevision::V1),
        )
    }

    fn v2_set() -> ArtifactSet {
        ArtifactSet::new(
            SchemaRevision::V2,
            table(
                EncodingKind::Frequency,
                &["main_genre", "original_language", "primary_country"],
            ),
            table(
                EncodingKind::Target,
                &["director", "lead_actor", "primary_company"],
            ),
            order(SchemaRevision::V2),
        )
    }

    #[test]
    fn test_valid_sets() {
        assert!(v1_set().validate().is_ok());
        assert!(v2_set().validate().is_ok());
    }

    #[test]
    fn test_v1_order_rejected_under_v2() {
        let v1 = v1_set();
        let mixed = ArtifactSet::new(
            SchemaRevision::V2,
            v2_set().frequency().clone(),
            v1.target().clone(),
            v1.feature_order().clone(),
        );

        let message = mixed.validate().unwrap_err().to_string();
        assert!(message.contains("does not match schema v2"));
        assert!(message.contains("main_genre_freq_enc"));
    }

    #[test]
    fn test_v2_order_rejected_under_v1() {
        let v2 = v2_set();
        let mixed = ArtifactSet::new(
            SchemaRevision::V1,
            v2.frequency().clone(),
            v2.target().clone(),
            v2.feature_order().clone(),
        );

        let message = mixed.validate().unwrap_err().to_string();
        assert!(message.contains("unexpected [main_genre_freq_enc, original_language_freq_enc, primary_country_freq_enc]"));
    }

    #[test]
    fn test_v2_requires_frequency_fields() {
        let set = ArtifactSet::new(
            SchemaRevision::V2,
            table(EncodingKind::Frequency, &["main_genre"]),
            v2_set().target().clone(),
            order(SchemaRevision::V2),
        );

        let message = set.validate().unwrap_err().to_string();
        assert!(message.contains("original_language, primary_country"));
    }

    #[test]
    fn test_swapped_tables_rejected() {
        let v2 = v2_set();
        let swapped = ArtifactSet::new(
            SchemaRevision::V2,
            v2.target().clone(),
            v2.frequency().clone(),
            v2.feature_order().clone(),
        );

        assert!(matches!(
            swapped.validate(),
            Err(DomainError::Configuration { .. })
        ));
    }
}
