//! Bird catalog model: families of species records as served by the catalog
//! API or bundled with the binary.
//!
//! The catalog is read-only input to scene assembly. Records deserialize from
//! the camelCase JSON shape shared by the API and the static data.

/// Serde model, lookups and validation.
pub mod bird_catalog;

/// Catalog compiled into the binary as a fallback data source.
pub mod static_catalog;

pub use bird_catalog::{BirdCatalog, BirdFamily, BirdRecord, BirdSize, CatalogEntry, CatalogError};
pub use static_catalog::bundled_catalog;
