/// Catalog asset, relative to the asset folder.
pub const CATALOG_ASSET_PATH: &str = "birds.catalog.json";

/// Seed for the jittered layout patterns when none is configured.
pub const DEFAULT_LAYOUT_SEED: u64 = 0x00B1_2D5E;

/// Environment variables read by native builds.
pub const CATALOG_PATH_ENV: &str = "AVIARY_CATALOG";
pub const LAYOUT_SEED_ENV: &str = "AVIARY_LAYOUT_SEED";
