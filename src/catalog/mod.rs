//! The content catalog: every collection the guide presents
//!
//! The catalog is loaded once and then treated as immutable reference data.
//! [`Catalog::shared`] exposes the built-in fixtures process-wide; callers
//! that need a different data set load their own with
//! [`Catalog::from_yaml_str`] or [`Catalog::from_yaml_file`].

use crate::content::{Festival, Manuscript, Monastery, Story};
use crate::core::error::CatalogError;
use crate::core::{Collection, FieldFormat, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yaml");

static SHARED: OnceLock<Catalog> = OnceLock::new();

/// All content collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub monasteries: Collection<Monastery>,
    pub festivals: Collection<Festival>,
    pub manuscripts: Collection<Manuscript>,
    pub stories: Collection<Story>,
}

impl Catalog {
    /// Parse the fixtures compiled into the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// The built-in catalog, parsed on first use and shared afterwards
    pub fn shared() -> Result<&'static Catalog, CatalogError> {
        if let Some(catalog) = SHARED.get() {
            return Ok(catalog);
        }

        let catalog = Self::builtin()?;
        Ok(SHARED.get_or_init(|| catalog))
    }

    /// Load a catalog from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
            file: None,
            message: e.to_string(),
        })?;

        catalog.validate()?;
        catalog.log_loaded(None);
        Ok(catalog)
    }

    /// Load a catalog from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let catalog: Self = serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse {
            file: Some(display.clone()),
            message: e.to_string(),
        })?;

        catalog.validate()?;
        catalog.log_loaded(Some(&display));
        Ok(catalog)
    }

    /// Check record ids are unique per collection and image links are URLs
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_collection(&self.monasteries, |m| &m.image)?;
        check_collection(&self.festivals, |f| &f.image)?;
        check_collection(&self.manuscripts, |m| &m.image)?;
        check_collection(&self.stories, |s| &s.image)?;
        Ok(())
    }

    /// Total number of records across all collections
    pub fn record_count(&self) -> usize {
        self.monasteries.len() + self.festivals.len() + self.manuscripts.len() + self.stories.len()
    }

    fn log_loaded(&self, file: Option<&str>) {
        tracing::info!(
            file = file.unwrap_or("<inline>"),
            monasteries = self.monasteries.len(),
            festivals = self.festivals.len(),
            manuscripts = self.manuscripts.len(),
            stories = self.stories.len(),
            "Catalog loaded"
        );
    }
}

fn check_collection<T: Record>(
    collection: &Collection<T>,
    image: impl Fn(&T) -> &String,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for record in collection {
        let id = record.id();

        if !FieldFormat::Url.validate_str(image(record.as_ref())) {
            tracing::warn!(
                resource = T::resource_name_singular(),
                id = %id,
                "Rejecting record with malformed image URL"
            );
            return Err(CatalogError::InvalidField {
                resource: T::resource_name_singular().to_string(),
                id,
                field: "image".to_string(),
                message: "expected an http(s) URL".to_string(),
            });
        }

        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId {
                resource: T::resource_name_singular().to_string(),
                id,
            });
        }
    }

    tracing::debug!(
        resource = T::resource_name(),
        records = collection.len(),
        "Collection validated"
    );
    Ok(())
}
