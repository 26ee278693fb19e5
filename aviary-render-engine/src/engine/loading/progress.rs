use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub bundled_catalog_ready: bool,
    /// The catalog asset either loaded or failed; it never blocks the scene.
    pub catalog_asset_settled: bool,
    pub scene_built: bool,
}
