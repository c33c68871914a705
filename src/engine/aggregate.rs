//! Aggregates and collection summaries

use crate::core::collection::Collection;
use crate::core::error::{QueryError, QueryResult};
use crate::core::query::{AggregateOp, AggregateRequest};
use crate::core::record::Record;
use crate::engine::distinct::{DistinctCount, distinct_counts};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Result of a single aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// count, countDistinct, countTrue
    Count(usize),
    /// sum, min, max, range
    Integer(i64),
}

impl Scalar {
    pub fn as_i64(&self) -> i64 {
        match self {
            Scalar::Count(n) => *n as i64,
            Scalar::Integer(i) => *i,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Count(n) => write!(f, "{}", n),
            Scalar::Integer(i) => write!(f, "{}", i),
        }
    }
}

/// Aggregate results keyed by request, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateReport {
    values: IndexMap<AggregateRequest, Scalar>,
}

impl AggregateReport {
    pub fn get(&self, request: &AggregateRequest) -> Option<Scalar> {
        self.values.get(request).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AggregateRequest, &Scalar)> {
        self.values.iter()
    }
}

impl Serialize for AggregateReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

/// Compute every request over the collection.
///
/// Fails on the first request that has no meaningful value (sum/min/max/range
/// over zero integer values). Duplicate requests are computed once.
pub fn aggregate<T: Record>(
    collection: &Collection<T>,
    requests: &[AggregateRequest],
) -> QueryResult<AggregateReport> {
    let mut values = IndexMap::with_capacity(requests.len());

    for request in requests {
        if values.contains_key(request) {
            continue;
        }
        let value = aggregate_one(collection, request)?;
        values.insert(request.clone(), value);
    }

    Ok(AggregateReport { values })
}

/// Compute a single aggregate
pub fn aggregate_one<T: Record>(
    collection: &Collection<T>,
    request: &AggregateRequest,
) -> QueryResult<Scalar> {
    let field = match (&request.field, request.op) {
        (None, AggregateOp::Count) => return Ok(Scalar::Count(collection.len())),
        (None, op) => return Err(QueryError::MissingAggregateField { op }),
        (Some(field), _) => field.as_str(),
    };

    match request.op {
        AggregateOp::Count => Ok(Scalar::Count(
            collection
                .iter()
                .filter(|r| r.field_value(field).is_some_and(|v| !v.is_null()))
                .count(),
        )),
        AggregateOp::CountDistinct => Ok(Scalar::Count(distinct_counts(collection, field).len())),
        AggregateOp::CountTrue => Ok(Scalar::Count(
            collection
                .iter()
                .filter(|r| r.field_value(field).and_then(|v| v.as_bool()) == Some(true))
                .count(),
        )),
        op @ (AggregateOp::Sum | AggregateOp::Min | AggregateOp::Max | AggregateOp::Range) => {
            let values: Vec<i64> = collection
                .iter()
                .filter_map(|r| r.field_value(field).and_then(|v| v.as_integer()))
                .collect();

            numeric(field, op, &values).map(Scalar::Integer)
        }
    }
}

// Errors when there are no values or the result leaves the i64 range
fn numeric(field: &str, op: AggregateOp, values: &[i64]) -> QueryResult<i64> {
    let empty = || QueryError::EmptyAggregate {
        field: field.to_string(),
        op,
    };
    let overflow = || QueryError::AggregateOverflow {
        field: field.to_string(),
        op,
    };

    let min = values.iter().copied().min().ok_or_else(empty)?;
    let max = values.iter().copied().max().ok_or_else(empty)?;

    match op {
        AggregateOp::Sum => values
            .iter()
            .try_fold(0_i64, |acc, v| acc.checked_add(*v))
            .ok_or_else(overflow),
        AggregateOp::Min => Ok(min),
        AggregateOp::Max => Ok(max),
        AggregateOp::Range => max.checked_sub(min).ok_or_else(overflow),
        AggregateOp::Count | AggregateOp::CountDistinct | AggregateOp::CountTrue => Err(empty()),
    }
}

/// Derived facts about a whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Number of records
    pub total: usize,

    /// Per-category distinct values with counts, first-seen order
    pub categories: IndexMap<String, Vec<DistinctCount>>,

    /// Requested aggregates
    pub aggregates: AggregateReport,
}

impl AggregateSummary {
    /// Distinct listing for one category field
    pub fn category(&self, field: &str) -> &[DistinctCount] {
        self.categories.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build a summary: total, distinct listings for `category_fields`, and
/// the requested aggregates.
///
/// Summaries are meant to be computed over the full collection, not a
/// filtered view, so dropdown choices do not shrink as filters are applied.
pub fn summarize<T: Record>(
    collection: &Collection<T>,
    category_fields: &[&str],
    requests: &[AggregateRequest],
) -> QueryResult<AggregateSummary> {
    let categories = category_fields
        .iter()
        .map(|field| (field.to_string(), distinct_counts(collection, field)))
        .collect();

    Ok(AggregateSummary {
        total: collection.len(),
        categories,
        aggregates: aggregate(collection, requests)?,
    })
}
