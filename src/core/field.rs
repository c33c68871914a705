//! Field value types and format validation

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// A polymorphic field value that can hold any record attribute
///
/// Enumerated categories (sect, district, language, ...) are plain `Text`;
/// the engine compares them exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Date(NaiveDate),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a calendar date if possible
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the value as a list of strings if possible
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Exact equality against an expected value.
    ///
    /// A list satisfies a text expectation when it contains that text, so
    /// `audio_guides = "Tibetan"` selects every record offering a Tibetan guide.
    /// A date and a text value match when the text is the ISO form of the date.
    pub fn satisfies(&self, expected: &FieldValue) -> bool {
        match (self, expected) {
            (FieldValue::List(items), FieldValue::Text(wanted)) => {
                items.iter().any(|item| item == wanted)
            }
            (FieldValue::Date(date), FieldValue::Text(text))
            | (FieldValue::Text(text), FieldValue::Date(date)) => date.to_string() == *text,
            _ => self == expected,
        }
    }

    /// Case-insensitive substring match. `needle` must already be lowercased.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::List(items) => items.iter().any(|s| s.to_lowercase().contains(needle)),
            _ => false,
        }
    }

    /// The individual values this field contributes to a distinct listing.
    ///
    /// Lists are flattened into their elements; nulls contribute nothing.
    pub fn distinct_items(&self) -> Vec<FieldValue> {
        match self {
            FieldValue::Null => Vec::new(),
            FieldValue::List(items) => items.iter().cloned().map(FieldValue::Text).collect(),
            other => vec![other.clone()],
        }
    }

    /// Ordering between two values of the same kind.
    ///
    /// Returns `None` for mismatched kinds and for nulls.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::List(a), FieldValue::List(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total order for sorting.
    ///
    /// Same-kind values compare as in [`compare`](Self::compare); otherwise
    /// kinds rank boolean < integer < date < text < list < null.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        self.compare(other)
            .unwrap_or_else(|| self.kind_rank().cmp(&other.kind_rank()))
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Boolean(_) => 0,
            FieldValue::Integer(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::List(_) => 4,
            FieldValue::Null => 5,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Date(d) => write!(f, "{}", d),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Field format validators used when loading fixtures and credentials
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &FieldValue) -> bool {
        let string_value = match value.as_text() {
            Some(s) => s,
            None => return false,
        };

        self.validate_str(string_value)
    }

    /// Validate a raw string against this format
    pub fn validate_str(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Url => Self::is_valid_url(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_text() {
        let value = FieldValue::from("Kagyu");
        assert_eq!(value.as_text(), Some("Kagyu"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_integer() {
        let value = FieldValue::from(1705_i64);
        assert_eq!(value.as_integer(), Some(1705));
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn test_option_none_is_null() {
        let value = FieldValue::from(None::<String>);
        assert!(value.is_null());
        assert!(value.distinct_items().is_empty());
    }

    #[test]
    fn test_satisfies_is_case_sensitive() {
        let sect = FieldValue::from("Nyingma");
        assert!(sect.satisfies(&FieldValue::from("Nyingma")));
        assert!(!sect.satisfies(&FieldValue::from("nyingma")));
    }

    #[test]
    fn test_satisfies_list_containment() {
        let guides = FieldValue::List(vec!["English".into(), "Tibetan".into()]);
        assert!(guides.satisfies(&FieldValue::from("Tibetan")));
        assert!(!guides.satisfies(&FieldValue::from("Nepali")));
    }

    #[test]
    fn test_satisfies_kind_mismatch() {
        assert!(!FieldValue::from(1966_i64).satisfies(&FieldValue::from("1966")));
        assert!(!FieldValue::from(true).satisfies(&FieldValue::from("true")));
    }

    #[test]
    fn test_contains_text_unicode() {
        let title = FieldValue::from("བར་དོ་ཐོས་གྲོལ།");
        assert!(title.contains_text("ཐོས"));

        let name = FieldValue::from("Rumtek Dharma Chakra Centre");
        assert!(name.contains_text("dharma"));
        assert!(!name.contains_text("xyz"));
        assert!(!FieldValue::from(300_i64).contains_text("300"));
    }

    #[test]
    fn test_distinct_items_flattens_lists() {
        let features = FieldValue::List(vec!["Library".into(), "Prayer Wheels".into()]);
        assert_eq!(
            features.distinct_items(),
            vec![FieldValue::from("Library"), FieldValue::from("Prayer Wheels")]
        );
    }

    #[test]
    fn test_compare_same_kind_only() {
        assert_eq!(
            FieldValue::from(1641_i64).compare(&FieldValue::from(1705_i64)),
            Some(Ordering::Less)
        );
        assert_eq!(FieldValue::from(1641_i64).compare(&FieldValue::from("a")), None);
        assert_eq!(FieldValue::Null.compare(&FieldValue::Null), None);
    }

    #[test]
    fn test_date_satisfies_matching_text() {
        let date = FieldValue::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        assert!(date.satisfies(&FieldValue::from("2024-01-15")));
        assert!(FieldValue::from("2024-01-15").satisfies(&date));
        assert!(!date.satisfies(&FieldValue::from("2024-01-16")));
        assert!(!date.satisfies(&FieldValue::from("January 15, 2024")));
    }

    #[test]
    fn test_total_cmp_ranks_kinds() {
        let integer = FieldValue::from(1966_i64);
        let text = FieldValue::from("1641");

        assert_eq!(integer.total_cmp(&text), Ordering::Less);
        assert_eq!(text.total_cmp(&integer), Ordering::Greater);
        assert_eq!(text.total_cmp(&FieldValue::from("1641")), Ordering::Equal);
        assert_eq!(FieldValue::from(true).total_cmp(&integer), Ordering::Less);
        assert_eq!(FieldValue::Null.total_cmp(&FieldValue::Null), Ordering::Equal);
    }

    #[test]
    fn test_untagged_deserialize_picks_kind() {
        let date: FieldValue = serde_json::from_str("\"2024-01-15\"").unwrap();
        assert_eq!(
            date,
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );

        let text: FieldValue = serde_json::from_str("\"East Sikkim\"").unwrap();
        assert_eq!(text, FieldValue::from("East Sikkim"));

        let flag: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, FieldValue::Boolean(true));

        let null: FieldValue = serde_json::from_str("null").unwrap();
        assert!(null.is_null());
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate(&FieldValue::from("pemba@example.com")));
        assert!(format.validate_str("tenzin.lama+guide@sikkim.gov.in"));
        assert!(!format.validate_str("invalid-email"));
        assert!(!format.validate_str("@example.com"));
    }

    #[test]
    fn test_url_validation() {
        let format = FieldFormat::Url;

        assert!(format.validate_str(
            "https://images.unsplash.com/photo-1544735716-392fe2489ffa?auto=format"
        ));
        assert!(!format.validate_str("not a url"));
    }

    #[test]
    fn test_custom_regex_validation() {
        let slug = FieldFormat::Custom(Regex::new(r"^[a-z0-9-]+$").unwrap());

        assert!(slug.validate(&FieldValue::from("saga-dawa")));
        assert!(!slug.validate(&FieldValue::from("Saga Dawa")));
    }

    #[test]
    fn test_format_validate_rejects_non_string() {
        let format = FieldFormat::Email;
        assert!(!format.validate(&FieldValue::Integer(42)));
        assert!(!format.validate(&FieldValue::Boolean(true)));
        assert!(!format.validate(&FieldValue::Null));
    }
}
