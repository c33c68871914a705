//! Pure record updates

use crate::core::collection::Collection;
use crate::core::error::{QueryError, QueryResult};
use crate::core::record::Record;
use std::sync::Arc;

/// Return a new collection with `field` of record `id` raised by one.
///
/// Every other record is shared with the input (`Arc::ptr_eq` holds), and
/// the input collection is left as it was. The caller replaces its own
/// reference with the returned collection.
pub fn increment_counter<T: Record>(
    collection: &Collection<T>,
    id: &str,
    field: &str,
) -> QueryResult<Collection<T>> {
    let position = collection
        .position(id)
        .ok_or_else(|| QueryError::RecordNotFound {
            resource: T::resource_name_singular().to_string(),
            id: id.to_string(),
        })?;

    let record = &collection.records()[position];
    let not_a_counter = || QueryError::NotACounter {
        resource: T::resource_name_singular().to_string(),
        id: id.to_string(),
        field: field.to_string(),
    };

    let next = record
        .counter(field)
        .ok_or_else(not_a_counter)?
        .checked_add(1)
        .ok_or_else(|| QueryError::CounterOverflow {
            resource: T::resource_name_singular().to_string(),
            id: id.to_string(),
            field: field.to_string(),
        })?;

    let updated = record.with_counter(field, next).ok_or_else(not_a_counter)?;

    let mut records = collection.records().to_vec();
    records[position] = Arc::new(updated);

    Ok(Collection::from_shared(records))
}
