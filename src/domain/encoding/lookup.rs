//! Categorical lookup tables

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::schema::EncodingKind;
use crate::domain::DomainError;

/// Encoding used for any category the training data never saw.
///
/// Unseen directors, actors, companies and so on degrade to this value instead
/// of failing the request. The model then predicts as if the category carried
/// no signal, which can move the result noticeably for target-encoded fields.
pub const UNKNOWN_CATEGORY_ENCODING: f64 = 0.0;

/// Field name -> category value -> encoded value
pub type CategoryMaps = HashMap<String, HashMap<String, f64>>;

/// Immutable frequency or target encoding table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupTable {
    kind: EncodingKind,
    fields: CategoryMaps,
}

impl LookupTable {
    pub fn new(kind: EncodingKind, fields: CategoryMaps) -> Self {
        Self { kind, fields }
    }

    pub fn empty(kind: EncodingKind) -> Self {
        Self::new(kind, HashMap::new())
    }

    pub fn kind(&self) -> EncodingKind {
        self.kind
    }

    /// Stored encoding for `value`, if the table has one
    pub fn lookup(&self, field: &str, value: &str) -> Option<f64> {
        self.fields.get(field)?.get(value).copied()
    }

    /// Stored encoding for `value`, or [`UNKNOWN_CATEGORY_ENCODING`] on a miss
    pub fn encode(&self, field: &str, value: &str) -> f64 {
        match self.lookup(field, value) {
            Some(encoded) => encoded,
            None => {
                trace!(
                    table = %self.kind,
                    field = %field,
                    value = %value,
                    "Unknown category, using default encoding"
                );
                UNKNOWN_CATEGORY_ENCODING
            }
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of categories known for `field`
    pub fn category_count(&self, field: &str) -> usize {
        self.fields.get(field).map_or(0, HashMap::len)
    }

    /// Field names sorted for stable output
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Fails with a configuration error naming every absent field
    pub fn require_fields(&self, fields: &[&str]) -> Result<(), DomainError> {
        let missing: Vec<&str> = fields
            .iter()
            .copied()
            .filter(|f| !self.has_field(f))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(DomainError::configuration(format!(
            "{} encoding table is missing fields: {}",
            self.kind,
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director_table() -> LookupTable {
        let mut directors = HashMap::new();
        directors.insert("Christopher Nolan".to_string(), 4.2);
        directors.insert("Ridley Scott".to_string(), 3.1);

        let mut fields = HashMap::new();
        fields.insert("director".to_string(), directors);
        LookupTable::new(EncodingKind::Target, fields)
    }

    #[test]
    fn test_known_category_returns_stored_value() {
        let table = director_table();
        assert_eq!(table.encode("director", "Christopher Nolan"), 4.2);
        assert_eq!(table.encode("director", "Ridley Scott"), 3.1);
    }

    #[test]
    fn test_unknown_category_defaults_to_zero() {
        let table = director_table();
        assert_eq!(table.encode("director", "Nobody In Particular"), 0.0);
        assert_eq!(table.lookup("director", "Nobody In Particular"), None);
    }

    #[test]
    fn test_unknown_field_defaults_to_zero() {
        let table = director_table();
        assert_eq!(table.encode("lead_actor", "Cillian Murphy"), 0.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = director_table();
        assert_eq!(table.encode("director", "christopher nolan"), 0.0);
    }

    #[test]
    fn test_require_fields() {
        let table = director_table();
        assert!(table.require_fields(&["director"]).is_ok());

        let err = table
            .require_fields(&["director", "lead_actor", "primary_company"])
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("target encoding table"));
        assert!(message.contains("lead_actor, primary_company"));
    }

    #[test]
    fn test_category_count() {
        let table = director_table();
        assert_eq!(table.category_count("director"), 2);
        assert_eq!(table.category_count("lead_actor"), 0);
        assert_eq!(table.field_names(), vec!["director"]);
    }
}
