//! Typed error handling for the sanctuary crate
//!
//! Errors are grouped by the component that raises them so callers can
//! match on the specific case (show a placeholder for an empty aggregate,
//! a "not found" page for a missing record) instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`QueryError`]: raised by the filter/aggregation engine
//! - [`CatalogError`]: raised while loading fixture collections
//! - [`SessionError`]: raised by the mock session
//! - [`ConfigError`]: raised while reading configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use sanctuary::prelude::*;
//!
//! match aggregate_one(&festivals, &AggregateRequest::min("monasteries")) {
//!     Ok(value) => println!("fewest monasteries: {}", value),
//!     Err(QueryError::EmptyAggregate { .. }) => println!("-"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use crate::core::query::AggregateOp;

/// The main error type for the crate
///
/// Engine functions return the narrower category they can fail with
/// ([`QueryError`] and friends). `SanctuaryError` is the umbrella for
/// application code that chains several of them with `?`, and for
/// [`SanctuaryConfig::load_catalog`](crate::config::SanctuaryConfig::load_catalog).
#[derive(Debug, thiserror::Error)]
pub enum SanctuaryError {
    /// Engine errors (aggregation, lookups, counters)
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Fixture loading errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Session errors
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SanctuaryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SanctuaryError::Query(e) => e.error_code(),
            SanctuaryError::Catalog(e) => e.error_code(),
            SanctuaryError::Session(e) => e.error_code(),
            SanctuaryError::Config(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised by the filter/aggregation engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// sum/min/max/range requested over zero values
    #[error("cannot compute {op} of '{field}' over an empty collection")]
    EmptyAggregate { field: String, op: AggregateOp },

    /// An aggregate that needs a field was requested without one
    #[error("aggregate {op} requires a field")]
    MissingAggregateField { op: AggregateOp },

    /// No record carries the requested id
    #[error("{resource} with id '{id}' not found")]
    RecordNotFound { resource: String, id: String },

    /// The record has no counter with that name
    #[error("field '{field}' of {resource} '{id}' is not a counter")]
    NotACounter {
        resource: String,
        id: String,
        field: String,
    },

    /// An aggregate does not fit in an i64
    #[error("{op} of '{field}' overflows a 64-bit integer")]
    AggregateOverflow { field: String, op: AggregateOp },

    /// The counter is already at its maximum
    #[error("counter '{field}' of {resource} '{id}' cannot be incremented past its maximum")]
    CounterOverflow {
        resource: String,
        id: String,
        field: String,
    },
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::EmptyAggregate { .. } => "EMPTY_AGGREGATE",
            QueryError::MissingAggregateField { .. } => "MISSING_AGGREGATE_FIELD",
            QueryError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            QueryError::NotACounter { .. } => "NOT_A_COUNTER",
            QueryError::AggregateOverflow { .. } => "AGGREGATE_OVERFLOW",
            QueryError::CounterOverflow { .. } => "COUNTER_OVERFLOW",
        }
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors raised while loading the content catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Fixture text could not be parsed
    #[error("failed to parse catalog{}: {message}", source_suffix(.file))]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// Fixture file could not be read
    #[error("failed to read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    /// Two records of one collection share an id
    #[error("duplicate {resource} id '{id}'")]
    DuplicateId { resource: String, id: String },

    /// A record field has an invalid format
    #[error("invalid {field} on {resource} '{id}': {message}")]
    InvalidField {
        resource: String,
        id: String,
        field: String,
        message: String,
    },
}

fn source_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl CatalogError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Parse { .. } => "CATALOG_PARSE_ERROR",
            CatalogError::Io { .. } => "CATALOG_IO_ERROR",
            CatalogError::DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            CatalogError::InvalidField { .. } => "CATALOG_INVALID_FIELD",
        }
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors raised by the mock session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Login or registration input was rejected
    #[error("invalid {field}: {message}")]
    InvalidCredentials { field: String, message: String },

    /// The stored user could not be decoded
    #[error("stored session under '{key}' is unreadable: {message}")]
    Corrupt { key: String, message: String },

    /// The session storage backend failed
    #[error("session storage failure: {message}")]
    Storage { message: String },
}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            SessionError::Corrupt { .. } => "SESSION_CORRUPT",
            SessionError::Storage { .. } => "SESSION_STORAGE_ERROR",
        }
    }
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        SessionError::Storage {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Invalid value in configuration
    #[error("invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}

/// Result type alias for engine operations
pub type QueryResult<T> = std::result::Result<T, QueryError>;
