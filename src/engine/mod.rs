//! Content filter/aggregation engine
//!
//! Stateless functions over [`Collection`](crate::core::Collection)s. Every
//! operation is a pure function of its inputs: collections are never
//! modified, results share records with their source, and errors are
//! returned to the caller rather than logged.

pub mod aggregate;
pub mod distinct;
pub mod filter;
pub mod update;

pub use aggregate::{AggregateReport, AggregateSummary, Scalar, aggregate, aggregate_one, summarize};
pub use distinct::{DistinctCount, distinct_counts, list_distinct_values};
pub use filter::{filter, matches, related, sort_records};
pub use update::increment_counter;
