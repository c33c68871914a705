//! Filter specifications, sort keys and aggregate requests

use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Sentinel value meaning "no constraint on this field"
pub const ALL: &str = "all";

/// A per-field equality constraint
///
/// On the wire a constraint is just the expected value; the string `"all"`
/// decodes to [`Constraint::All`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldValue", into = "FieldValue")]
pub enum Constraint {
    /// Pass every record through
    All,
    /// Keep records whose field equals the value
    Equals(FieldValue),
}

impl Constraint {
    /// Whether this constraint filters anything out
    pub fn is_active(&self) -> bool {
        matches!(self, Constraint::Equals(_))
    }
}

impl From<FieldValue> for Constraint {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(ref s) if s == ALL => Constraint::All,
            other => Constraint::Equals(other),
        }
    }
}

impl From<Constraint> for FieldValue {
    fn from(constraint: Constraint) -> Self {
        match constraint {
            Constraint::All => FieldValue::Text(ALL.to_string()),
            Constraint::Equals(value) => value,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort field and direction
///
/// # Format
/// - `field:asc` or `field` (ascending)
/// - `field:desc` (descending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse `field`, `field:asc` or `field:desc`
    ///
    /// Returns `None` for an empty field or an unknown direction.
    pub fn parse(expr: &str) -> Option<Self> {
        let (field, direction) = match expr.split_once(':') {
            Some((field, "asc")) => (field, SortDirection::Asc),
            Some((field, "desc")) => (field, SortDirection::Desc),
            Some(_) => return None,
            None => (expr, SortDirection::Asc),
        };

        if field.is_empty() {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Declarative filter/search specification
///
/// Built fresh for each query and discarded afterwards. A record passes when
/// every active equality constraint holds and, for a non-empty text query,
/// at least one search field contains the query case-insensitively.
///
/// # Example
/// ```rust,ignore
/// let spec = FilterSpec::for_record::<Manuscript>()
///     .with_equals("language", "Tibetan")
///     .with_constraint("category", Constraint::All)
///     .with_text("sutra")
///     .sorted_by("likes:desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Field name to constraint, applied in insertion order
    pub equality_filters: IndexMap<String, Constraint>,

    /// Free-text query; empty or absent matches everything
    pub text_query: Option<String>,

    /// Fields scanned by the text query
    pub search_fields: Vec<String>,

    /// Optional stable sort applied after filtering
    pub sort: Option<SortSpec>,
}

impl FilterSpec {
    /// An empty spec that keeps every record
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty spec whose search fields come from the record's adapter
    pub fn for_record<T: Record>() -> Self {
        Self::new().with_search_fields(T::searchable_fields())
    }

    /// Build a spec from a JSON filter object
    ///
    /// # Format
    /// ```text
    /// {"sect": "Nyingma", "location": "all", "upcoming": true}
    /// ```
    ///
    /// Non-object values produce an empty spec. Values that are not scalars,
    /// strings or string arrays are skipped. Strings are always text, even
    /// when they look like dates.
    pub fn from_json(filter: &Value) -> Self {
        let mut spec = Self::new();

        if let Some(obj) = filter.as_object() {
            for (key, value) in obj {
                let parsed = match value {
                    Value::String(s) => Some(FieldValue::Text(s.clone())),
                    other => serde_json::from_value::<FieldValue>(other.clone()).ok(),
                };
                if let Some(parsed) = parsed {
                    spec.equality_filters.insert(key.clone(), parsed.into());
                }
            }
        }

        spec
    }

    /// Require `field` to equal `value` (`"all"` clears the constraint)
    pub fn with_equals(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.with_constraint(field, Constraint::from(value.into()))
    }

    pub fn with_constraint(mut self, field: impl Into<String>, constraint: Constraint) -> Self {
        self.equality_filters.insert(field.into(), constraint);
        self
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the sort from `field[:asc|:desc]`; unparseable input clears it
    pub fn sorted_by(mut self, expr: &str) -> Self {
        self.sort = SortSpec::parse(expr);
        self
    }

    /// Constraints that actually filter (everything except `All`)
    pub fn active_constraints(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.equality_filters
            .iter()
            .filter_map(|(field, constraint)| match constraint {
                Constraint::Equals(value) => Some((field.as_str(), value)),
                Constraint::All => None,
            })
    }

    /// Lowercased text query, or `None` when it matches everything
    pub fn needle(&self) -> Option<String> {
        self.text_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// Supported aggregate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregateOp {
    /// Number of records (or of records with a non-null field)
    Count,
    /// Integer sum
    Sum,
    /// Smallest integer value
    Min,
    /// Largest integer value
    Max,
    /// Number of distinct values
    CountDistinct,
    /// Max minus min
    Range,
    /// Number of records whose boolean field is true
    CountTrue,
}

impl AggregateOp {
    /// Whether the operation has no meaningful value over zero inputs
    pub fn needs_values(&self) -> bool {
        matches!(
            self,
            AggregateOp::Sum | AggregateOp::Min | AggregateOp::Max | AggregateOp::Range
        )
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregateOp::Count => "count",
            AggregateOp::Sum => "sum",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::CountDistinct => "countDistinct",
            AggregateOp::Range => "range",
            AggregateOp::CountTrue => "countTrue",
        };
        write!(f, "{}", name)
    }
}

/// A single aggregate request: an operation over an optional field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub op: AggregateOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AggregateRequest {
    pub fn new(op: AggregateOp, field: impl Into<String>) -> Self {
        Self {
            op,
            field: Some(field.into()),
        }
    }

    /// Count every record in the collection
    pub fn count() -> Self {
        Self {
            op: AggregateOp::Count,
            field: None,
        }
    }

    pub fn sum(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::Sum, field)
    }

    pub fn min(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::Min, field)
    }

    pub fn max(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::Max, field)
    }

    pub fn count_distinct(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::CountDistinct, field)
    }

    pub fn range(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::Range, field)
    }

    pub fn count_true(field: impl Into<String>) -> Self {
        Self::new(AggregateOp::CountTrue, field)
    }
}

impl fmt::Display for AggregateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.op, self.field.as_deref().unwrap_or("*"))
    }
}
