//! Distinct value listings in first-seen order

use crate::core::collection::Collection;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A distinct value and how many times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinctCount {
    pub value: FieldValue,
    pub count: usize,
}

/// Distinct values of `field`, in the order they first appear.
///
/// List fields contribute each element; records without the field, and null
/// values, contribute nothing. An absent field yields an empty listing.
pub fn list_distinct_values<T: Record>(collection: &Collection<T>, field: &str) -> Vec<FieldValue> {
    tally(collection, field).into_keys().collect()
}

/// Distinct values of `field` with their occurrence counts, first-seen order
pub fn distinct_counts<T: Record>(collection: &Collection<T>, field: &str) -> Vec<DistinctCount> {
    tally(collection, field)
        .into_iter()
        .map(|(value, count)| DistinctCount { value, count })
        .collect()
}

fn tally<T: Record>(collection: &Collection<T>, field: &str) -> IndexMap<FieldValue, usize> {
    let mut seen: IndexMap<FieldValue, usize> = IndexMap::new();

    for record in collection {
        let Some(value) = record.field_value(field) else {
            continue;
        };

        for item in value.distinct_items() {
            *seen.entry(item).or_insert(0) += 1;
        }
    }

    seen
}
