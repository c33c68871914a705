//! Festival records

use crate::core::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// A festival celebrated at one or more monasteries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub id: String,
    pub name: String,
    pub tibetan_name: String,
    pub category: String,
    pub duration: String,
    /// Free-form date range as shown to visitors ("February 10-12, 2024")
    pub date: String,
    /// Number of monasteries celebrating
    pub monasteries: i64,
    pub cost: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub upcoming: bool,
}

impl Record for Festival {
    fn resource_name() -> &'static str {
        "festivals"
    }

    fn resource_name_singular() -> &'static str {
        "festival"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.clone().into(),
            "name" => self.name.clone().into(),
            "tibetan_name" => self.tibetan_name.clone().into(),
            "category" => self.category.clone().into(),
            "duration" => self.duration.clone().into(),
            "date" => self.date.clone().into(),
            "monasteries" => self.monasteries.into(),
            "cost" => self.cost.clone().into(),
            "description" => self.description.clone().into(),
            "image" => self.image.clone().into(),
            "upcoming" => self.upcoming.into(),
            _ => return None,
        };
        Some(value)
    }

    fn filterable_fields() -> &'static [&'static str] {
        &["category", "upcoming"]
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "tibetan_name", "category", "description"]
    }

    fn aggregable_fields() -> &'static [&'static str] {
        &["monasteries"]
    }
}
