//! Core module containing the fundamental types shared by the engine,
//! the content collections and the session

pub mod collection;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod service;
pub mod session;

pub use collection::Collection;
pub use error::{
    CatalogError, ConfigError, QueryError, QueryResult, SanctuaryError, SessionError,
};
pub use field::{FieldFormat, FieldValue};
pub use query::{
    ALL, AggregateOp, AggregateRequest, Constraint, FilterSpec, SortDirection, SortSpec,
};
pub use record::{DynamicRecord, Record};
pub use service::SessionStorage;
pub use session::{DEFAULT_SESSION_KEY, Session, User};
