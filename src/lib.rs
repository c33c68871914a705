//! # Sanctuary
//!
//! Content engine for a monastery heritage guide: browse, search and
//! summarize monasteries, festivals, manuscripts and community stories.
//!
//! ## Features
//!
//! - **One generic engine**: filtering, distinct values, aggregates and
//!   counter increments work over any [`Record`](core::Record) type
//! - **Immutable collections**: every operation returns a new
//!   [`Collection`](core::Collection) sharing untouched records with its source
//! - **Typed errors**: empty aggregates and missing records are values the
//!   caller matches on
//! - **YAML fixtures**: the built-in catalog, or any file with the same layout
//! - **Mock session**: an explicit, caller-owned login state persisted through
//!   a pluggable [`SessionStorage`](core::SessionStorage)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sanctuary::prelude::*;
//!
//! let catalog = Catalog::shared()?;
//!
//! let nyingma = filter(
//!     &catalog.monasteries,
//!     &FilterSpec::for_record::<Monastery>().with_equals("sect", "Nyingma"),
//! );
//!
//! let report = aggregate(
//!     &catalog.monasteries,
//!     &[AggregateRequest::count(), AggregateRequest::sum("monks")],
//! )?;
//!
//! let liked = increment_counter(&catalog.stories, "1", "likes")?;
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod core;
pub mod engine;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ALL, AggregateOp, AggregateRequest, CatalogError, Collection, ConfigError, Constraint,
        DynamicRecord, FieldFormat, FieldValue, FilterSpec, QueryError, QueryResult, Record,
        SanctuaryError, Session, SessionError, SessionStorage, SortDirection, SortSpec, User,
    };

    // === Engine ===
    pub use crate::engine::{
        AggregateReport, AggregateSummary, DistinctCount, Scalar, aggregate, aggregate_one,
        distinct_counts, filter, increment_counter, list_distinct_values, related, summarize,
    };

    // === Content ===
    pub use crate::catalog::Catalog;
    pub use crate::content::{Festival, Manuscript, Monastery, Story};

    // === Storage ===
    pub use crate::storage::InMemorySessionStorage;

    // === Config ===
    pub use crate::config::SanctuaryConfig;
}
