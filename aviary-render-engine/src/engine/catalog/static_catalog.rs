use super::bird_catalog::{BirdCatalog, CatalogError};

/// Catalog compiled into the binary. Used whenever the catalog asset is still
/// loading or could not be loaded.
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../../../assets/birds.catalog.json");

pub fn bundled_catalog() -> Result<BirdCatalog, CatalogError> {
    BirdCatalog::from_json(BUNDLED_CATALOG_JSON)
}
