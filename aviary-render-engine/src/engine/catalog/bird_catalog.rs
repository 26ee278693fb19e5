use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Failure modes when turning catalog JSON into a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bird id `{0}` appears more than once")]
    DuplicateBirdId(String),
    #[error("bird in family `{family}` has an empty {field}")]
    EmptyField { family: String, field: &'static str },
}

/// Coarse body size used to scale the bird mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BirdSize {
    Tiny,
    #[default]
    Small,
    Medium,
    Large,
}

impl BirdSize {
    /// Body radius in world units.
    pub fn body_radius(self) -> f32 {
        use constants::render_settings::*;
        match self {
            BirdSize::Tiny => BIRD_SIZE_TINY,
            BirdSize::Small => BIRD_SIZE_SMALL,
            BirdSize::Medium => BIRD_SIZE_MEDIUM,
            BirdSize::Large => BIRD_SIZE_LARGE,
        }
    }
}

/// One species entry. Only `id` and `name` are required; display fields default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub size: BirdSize,
    #[serde(default)]
    pub wingspan: String,
    /// Free-text habitat tags for display, unrelated to the computed habitat zone.
    #[serde(default)]
    pub habitat: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub is_endangered: bool,
    #[serde(default)]
    pub fun_fact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdFamily {
    pub id: String,
    pub name: String,
    /// CSS style hex colour, e.g. `#e74c3c`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub birds: Vec<BirdRecord>,
}

/// A bird paired with the family it was listed under.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub bird: &'a BirdRecord,
    pub family: &'a BirdFamily,
}

/// Ordered list of families as served by the catalog API and the bundled data.
/// Loadable as a Bevy asset from a JSON array.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirdCatalog {
    pub families: Vec<BirdFamily>,
}

impl BirdCatalog {
    pub fn new(families: Vec<BirdFamily>) -> Self {
        Self { families }
    }

    /// Parse and validate catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: BirdCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Ids must be unique and non-empty, names non-empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for family in &self.families {
            for bird in &family.birds {
                if bird.id.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        family: family.name.clone(),
                        field: "id",
                    });
                }
                if bird.name.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        family: family.name.clone(),
                        field: "name",
                    });
                }
                if !seen.insert(bird.id.as_str()) {
                    return Err(CatalogError::DuplicateBirdId(bird.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Every bird in catalog order: family order, then bird order within the family.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.families.iter().flat_map(|family| {
            family
                .birds
                .iter()
                .map(move |bird| CatalogEntry { bird, family })
        })
    }

    pub fn bird_count(&self) -> usize {
        self.families.iter().map(|family| family.birds.len()).sum()
    }
}
