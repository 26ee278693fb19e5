use bevy::prelude::*;
use constants::path::{CATALOG_ASSET_PATH, DEFAULT_LAYOUT_SEED};

/// Runtime scene configuration.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SceneSettings {
    /// Catalog asset path, relative to the asset folder.
    pub catalog_path: String,
    /// Seed for the jittered layout patterns and garden props.
    pub layout_seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            catalog_path: CATALOG_ASSET_PATH.to_string(),
            layout_seed: DEFAULT_LAYOUT_SEED,
        }
    }
}

impl SceneSettings {
    /// Defaults overridden by `AVIARY_CATALOG` and `AVIARY_LAYOUT_SEED`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        use constants::path::{CATALOG_PATH_ENV, LAYOUT_SEED_ENV};

        let mut settings = Self::default();

        if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
            if !path.trim().is_empty() {
                settings.catalog_path = path.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var(LAYOUT_SEED_ENV) {
            match parse_seed(&raw) {
                Some(seed) => settings.layout_seed = seed,
                None => warn!("Ignoring {LAYOUT_SEED_ENV}={raw:?}: not a decimal or 0x seed"),
            }
        }

        settings
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Parses a seed written in decimal or as `0x` hex.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16).ok(),
        None => raw.replace('_', "").parse().ok(),
    }
}
