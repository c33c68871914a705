//! Filtering, text search and stable sorting

use crate::core::collection::Collection;
use crate::core::field::FieldValue;
use crate::core::query::{FilterSpec, SortDirection, SortSpec};
use crate::core::record::Record;
use std::cmp::Ordering;
use std::sync::Arc;

/// Apply a filter specification to a collection.
///
/// Relative order is preserved; when the spec carries a sort, a stable sort
/// is applied to the surviving records. The source collection is untouched
/// and the result shares its records.
pub fn filter<T: Record>(collection: &Collection<T>, spec: &FilterSpec) -> Collection<T> {
    let needle = spec.needle();

    let mut kept: Vec<Arc<T>> = collection
        .iter()
        .filter(|record| matches(record.as_ref(), spec, needle.as_deref()))
        .cloned()
        .collect();

    if let Some(sort) = &spec.sort {
        sort_records(&mut kept, sort);
    }

    Collection::from_shared(kept)
}

/// Whether a single record passes the spec.
///
/// `needle` is the lowercased text query (see [`FilterSpec::needle`]).
pub fn matches<T: Record>(record: &T, spec: &FilterSpec, needle: Option<&str>) -> bool {
    let constraints_hold = spec.active_constraints().all(|(field, expected)| {
        record
            .field_value(field)
            .is_some_and(|actual| actual.satisfies(expected))
    });

    if !constraints_hold {
        return false;
    }

    match needle {
        None => true,
        Some(needle) => spec.search_fields.iter().any(|field| {
            record
                .field_value(field)
                .is_some_and(|value| value.contains_text(needle))
        }),
    }
}

/// Stable in-place sort by one field.
///
/// Records without a value for the field go last in both directions; ties
/// keep their existing order. Mixed value kinds group by kind (see
/// [`FieldValue::total_cmp`]).
pub fn sort_records<T: Record>(records: &mut [Arc<T>], sort: &SortSpec) {
    records.sort_by(|a, b| {
        let va = sort_key(a.as_ref(), &sort.field);
        let vb = sort_key(b.as_ref(), &sort.field);

        match (va, vb) {
            (Some(va), Some(vb)) => {
                let ord = va.total_cmp(&vb);
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn sort_key<T: Record>(record: &T, field: &str) -> Option<FieldValue> {
    record.field_value(field).filter(|v| !v.is_null())
}

/// Every record except `id`, in original order, at most `limit` of them.
///
/// Used for "other festivals" style listings on detail pages.
pub fn related<T: Record>(collection: &Collection<T>, id: &str, limit: usize) -> Collection<T> {
    collection
        .iter()
        .filter(|record| record.id() != id)
        .take(limit)
        .cloned()
        .collect()
}
