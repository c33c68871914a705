//! Manuscript records

use crate::core::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// A manuscript held in a monastery library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manuscript {
    pub id: String,
    pub title: String,
    pub tibetan_title: String,
    pub category: String,
    pub language: String,
    /// Holding monastery, by display name
    pub monastery: String,
    /// Century of origin as written ("15th")
    pub century: String,
    pub pages: i64,
    pub description: String,
    pub image: String,
    /// Whether a digital copy exists.
    ///
    /// Older fixtures spell this `digitalized` or `digitalalized`; both load.
    #[serde(default, alias = "digitalized", alias = "digitalalized")]
    pub digitized: bool,
    #[serde(default)]
    pub sacred: bool,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub views: i64,
}

impl Manuscript {
    fn counter_mut(&mut self, field: &str) -> Option<&mut i64> {
        match field {
            "likes" => Some(&mut self.likes),
            "views" => Some(&mut self.views),
            _ => None,
        }
    }
}

impl Record for Manuscript {
    fn resource_name() -> &'static str {
        "manuscripts"
    }

    fn resource_name_singular() -> &'static str {
        "manuscript"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.clone().into(),
            "title" => self.title.clone().into(),
            "tibetan_title" => self.tibetan_title.clone().into(),
            "category" => self.category.clone().into(),
            "language" => self.language.clone().into(),
            "monastery" => self.monastery.clone().into(),
            "century" => self.century.clone().into(),
            "pages" => self.pages.into(),
            "description" => self.description.clone().into(),
            "image" => self.image.clone().into(),
            "digitized" => self.digitized.into(),
            "sacred" => self.sacred.into(),
            "likes" => self.likes.into(),
            "views" => self.views.into(),
            _ => return None,
        };
        Some(value)
    }

    fn counter(&self, field: &str) -> Option<i64> {
        match field {
            "likes" => Some(self.likes),
            "views" => Some(self.views),
            _ => None,
        }
    }

    fn with_counter(&self, field: &str, value: i64) -> Option<Self> {
        let mut next = self.clone();
        *next.counter_mut(field)? = value;
        Some(next)
    }

    fn filterable_fields() -> &'static [&'static str] {
        &["category", "language", "monastery", "digitized", "sacred"]
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["title", "tibetan_title", "description"]
    }

    fn aggregable_fields() -> &'static [&'static str] {
        &["pages", "likes", "views"]
    }
}
