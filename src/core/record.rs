//! Record trait: the shape every content type exposes to the engine

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Base trait for all records handled by the engine.
///
/// A record is a mapping from field name to [`FieldValue`] plus a
/// caller-supplied identifier. The engine treats the identifier as opaque:
/// it never generates or reassigns it.
///
/// The three field lists are the per-type adapter describing which fields a
/// content page can filter on, search in, and aggregate over. They are
/// advisory: the engine accepts any field name and degrades to "no value"
/// for fields a record does not have.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "monasteries", "stories")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "monastery", "story")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> String;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Current value of a counter field (likes, views, comments)
    ///
    /// Only engagement tallies are counters. Integer attributes such as a
    /// founding year are not, so the default exposes none.
    fn counter(&self, _field: &str) -> Option<i64> {
        None
    }

    /// Copy of this record with counter `field` set to `value`
    ///
    /// `None` when `field` is not a counter of this record.
    fn with_counter(&self, _field: &str, _value: i64) -> Option<Self> {
        None
    }

    /// Copy of this record with counter `field` raised by one.
    ///
    /// `None` when `field` is not a counter or is already at `i64::MAX`.
    fn with_incremented(&self, field: &str) -> Option<Self> {
        let next = self.counter(field)?.checked_add(1)?;
        self.with_counter(field, next)
    }

    /// Fields exposed as exact-match filters
    fn filterable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Fields scanned by free-text search
    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Numeric fields that summaries aggregate over
    fn aggregable_fields() -> &'static [&'static str] {
        &[]
    }
}

/// A schemaless record backed by an ordered field map.
///
/// Useful for ad-hoc collections and for exercising the engine without a
/// concrete content type. Its adapter lists are empty, so callers name
/// search fields explicitly on the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl DynamicRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl Record for DynamicRecord {
    fn resource_name() -> &'static str {
        "records"
    }

    fn resource_name_singular() -> &'static str {
        "record"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }

    /// Every integer field of a schemaless record counts
    fn counter(&self, field: &str) -> Option<i64> {
        self.fields.get(field)?.as_integer()
    }

    fn with_counter(&self, field: &str, value: i64) -> Option<Self> {
        self.counter(field)?;
        let mut next = self.clone();
        next.fields
            .insert(field.to_string(), FieldValue::Integer(value));
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_record_fields() {
        let record = DynamicRecord::new("rumtek")
            .with("sect", "Kagyu")
            .with("monks", 300_i64);

        assert_eq!(record.id(), "rumtek");
        assert_eq!(record.field_value("sect"), Some(FieldValue::from("Kagyu")));
        assert_eq!(record.field_value("altitude"), None);
    }

    #[test]
    fn test_dynamic_record_increment() {
        let record = DynamicRecord::new("1").with("likes", 156_i64).with("title", "x");

        let liked = record.with_incremented("likes").unwrap();
        assert_eq!(liked.field_value("likes"), Some(FieldValue::Integer(157)));
        assert_eq!(record.field_value("likes"), Some(FieldValue::Integer(156)));

        assert!(record.with_incremented("title").is_none());
        assert!(record.with_incremented("missing").is_none());
    }

    #[test]
    fn test_dynamic_record_metadata() {
        assert_eq!(DynamicRecord::resource_name(), "records");
        assert_eq!(DynamicRecord::resource_name_singular(), "record");
        assert!(DynamicRecord::searchable_fields().is_empty());
    }

    #[test]
    fn test_dynamic_record_serde_flattens_fields() {
        let record = DynamicRecord::new("enchey").with("founded", 1909_i64);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": "enchey", "founded": 1909}));
    }
}
