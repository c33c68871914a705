//! Community story records

use crate::core::{FieldValue, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A story shared by a community member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    /// "experience", "history", ...
    pub category: String,
    pub monastery: String,
    pub author: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub verified: bool,
    /// Written by a Sikkim resident
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    pub content: String,
    pub image: String,
}

impl Story {
    /// Author initials for avatars ("Pemba Sherpa" -> "PS")
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Record for Story {
    fn resource_name() -> &'static str {
        "stories"
    }

    fn resource_name_singular() -> &'static str {
        "story"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.clone().into(),
            "title" => self.title.clone().into(),
            "category" => self.category.clone().into(),
            "monastery" => self.monastery.clone().into(),
            "author" => self.author.clone().into(),
            "date" => self.date.into(),
            "verified" => self.verified.into(),
            "local" => self.local.into(),
            "likes" => self.likes.into(),
            "comments" => self.comments.into(),
            "content" => self.content.clone().into(),
            "image" => self.image.clone().into(),
            _ => return None,
        };
        Some(value)
    }

    fn counter(&self, field: &str) -> Option<i64> {
        match field {
            "likes" => Some(self.likes),
            "comments" => Some(self.comments),
            _ => None,
        }
    }

    fn with_counter(&self, field: &str, value: i64) -> Option<Self> {
        let mut next = self.clone();
        match field {
            "likes" => next.likes = value,
            "comments" => next.comments = value,
            _ => return None,
        }
        Some(next)
    }

    fn filterable_fields() -> &'static [&'static str] {
        &["category", "monastery", "verified", "local"]
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["title", "author", "monastery", "content"]
    }

    fn aggregable_fields() -> &'static [&'static str] {
        &["likes", "comments"]
    }
}
