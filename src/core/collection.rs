//! Immutable, cheaply shareable record collections

use crate::core::error::{QueryError, QueryResult};
use crate::core::record::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// An ordered, immutable sequence of records.
///
/// Records are held behind `Arc` so derived views (filter results, a
/// collection with one counter bumped) share the untouched records with
/// their source instead of copying them. A collection is never modified in
/// place; every engine operation returns a new one.
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<Arc<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Build from already shared records, keeping their identity
    pub fn from_shared(records: Vec<Arc<T>>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Arc<T>] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<T>> {
        self.records.iter()
    }

    /// Record ids in collection order
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id()).collect()
    }

    /// Find the first record with the given id
    pub fn find(&self, id: &str) -> Option<&Arc<T>> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Like [`find`](Self::find), but a missing id is an error
    pub fn get(&self, id: &str) -> QueryResult<&Arc<T>> {
        self.find(id).ok_or_else(|| QueryError::RecordNotFound {
            resource: T::resource_name_singular().to_string(),
            id: id.to_string(),
        })
    }

    /// Position of the first record with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<T: Record> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T: Record> FromIterator<Arc<T>> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        Self::from_shared(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a Arc<T>;
    type IntoIter = std::slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.iter().map(|r| r.as_ref()))
    }
}

impl<'de, T: Record + Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
