use super::environment::HabitatCategory;
use crate::engine::catalog::{BirdCatalog, BirdRecord, CatalogEntry};
use constants::habitat_keywords::*;

/// Name tables in priority order. Checked against bird name and family name.
const NAME_RULES: [(&[&str], HabitatCategory); 5] = [
    (WOODPECKER_KEYWORDS, HabitatCategory::TreeHigh),
    (HUMMINGBIRD_KEYWORDS, HabitatCategory::Garden),
    (WATER_KEYWORDS, HabitatCategory::Water),
    (SKY_KEYWORDS, HabitatCategory::Sky),
    (GROUND_KEYWORDS, HabitatCategory::Ground),
];

/// Taxonomic family tables, same priority. Checked against the family name only.
const FAMILY_RULES: [(&[&str], HabitatCategory); 5] = [
    (WOODPECKER_FAMILIES, HabitatCategory::TreeHigh),
    (HUMMINGBIRD_FAMILIES, HabitatCategory::Garden),
    (WATER_FAMILIES, HabitatCategory::Water),
    (SKY_FAMILIES, HabitatCategory::Sky),
    (GROUND_FAMILIES, HabitatCategory::Ground),
];

/// Assign a habitat zone from the bird name and its family name.
///
/// Case-insensitive substring matching, first table to match wins. Birds that
/// match nothing perch in the tree zone.
pub fn classify(bird: &BirdRecord, family_name: &str) -> HabitatCategory {
    classify_name(&bird.name, family_name)
}

pub fn classify_name(bird_name: &str, family_name: &str) -> HabitatCategory {
    let name = bird_name.to_lowercase();
    let family = family_name.to_lowercase();

    for (keywords, habitat) in NAME_RULES {
        if keywords
            .iter()
            .any(|keyword| name.contains(keyword) || family.contains(keyword))
        {
            return habitat;
        }
    }

    for (families, habitat) in FAMILY_RULES {
        if families.iter().any(|keyword| family.contains(keyword)) {
            return habitat;
        }
    }

    HabitatCategory::Tree
}

/// Catalog birds bucketed by habitat, in scene order, without any layout.
pub fn group_by_habitat(catalog: &BirdCatalog) -> Vec<(HabitatCategory, Vec<CatalogEntry<'_>>)> {
    let mut groups: Vec<_> = HabitatCategory::ALL
        .iter()
        .map(|&habitat| (habitat, Vec::new()))
        .collect();

    for entry in catalog.entries() {
        let habitat = classify(entry.bird, &entry.family.name);
        if let Some((_, birds)) = groups.iter_mut().find(|(h, _)| *h == habitat) {
            birds.push(entry);
        }
    }
    groups
}
