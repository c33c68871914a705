//! Monastery records

use crate::core::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// A monastery listed in the guide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monastery {
    pub id: String,
    pub name: String,
    pub tibetan_name: String,
    /// Buddhist lineage (Kagyu, Nyingma, ...)
    pub sect: String,
    /// Year of foundation
    pub founded: i64,
    /// District, e.g. "East Sikkim"
    pub location: String,
    pub altitude: String,
    pub distance: String,
    pub monks: i64,
    pub hours: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub audio_guides: Vec<String>,
    #[serde(default)]
    pub virtual_tour: bool,
    /// Latitude, longitude
    pub coordinates: [f64; 2],
}

impl Record for Monastery {
    fn resource_name() -> &'static str {
        "monasteries"
    }

    fn resource_name_singular() -> &'static str {
        "monastery"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.clone().into(),
            "name" => self.name.clone().into(),
            "tibetan_name" => self.tibetan_name.clone().into(),
            "sect" => self.sect.clone().into(),
            "founded" => self.founded.into(),
            "location" => self.location.clone().into(),
            "altitude" => self.altitude.clone().into(),
            "distance" => self.distance.clone().into(),
            "monks" => self.monks.into(),
            "hours" => self.hours.clone().into(),
            "description" => self.description.clone().into(),
            "image" => self.image.clone().into(),
            "features" => self.features.clone().into(),
            "audio_guides" => self.audio_guides.clone().into(),
            "virtual_tour" => self.virtual_tour.into(),
            _ => return None,
        };
        Some(value)
    }

    fn filterable_fields() -> &'static [&'static str] {
        &["sect", "location", "virtual_tour", "audio_guides"]
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "tibetan_name", "location", "description", "features"]
    }

    fn aggregable_fields() -> &'static [&'static str] {
        &["founded", "monks"]
    }
}
