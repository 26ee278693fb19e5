use super::progress::LoadingProgress;
use crate::engine::catalog::{BirdCatalog, bundled_catalog};
use crate::engine::core::settings::SceneSettings;
use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::Serialize;

/// Where the active catalog came from. Scene assembly never looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Compiled into the binary.
    Bundled,
    /// Loaded through the asset server.
    Asset,
    /// Pushed by the frontend over RPC.
    Frontend,
}

/// A validated catalog that should replace the current scene.
#[derive(Event, Debug, Clone)]
pub struct CatalogUpdate {
    pub catalog: BirdCatalog,
    pub source: CatalogSource,
}

/// Catalog the current scene was built from.
#[derive(Resource, Debug, Default)]
pub struct ActiveCatalog {
    pub catalog: BirdCatalog,
    pub source: Option<CatalogSource>,
}

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<BirdCatalog>>,
    failed: bool,
}

/// Publishes the bundled catalog so a scene exists immediately, then starts
/// loading the catalog asset that may replace it.
pub fn start_catalog_loading(
    settings: Res<SceneSettings>,
    asset_server: Res<AssetServer>,
    mut loader: ResMut<CatalogLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut updates: EventWriter<CatalogUpdate>,
) {
    match bundled_catalog() {
        Ok(catalog) => {
            info!(
                "Bundled catalog ready: {} birds in {} families",
                catalog.bird_count(),
                catalog.families.len()
            );
            updates.write(CatalogUpdate {
                catalog,
                source: CatalogSource::Bundled,
            });
            progress.bundled_catalog_ready = true;
        }
        Err(err) => error!("Bundled catalog is unusable: {err}"),
    }

    info!("Loading catalog asset from: {}", settings.catalog_path);
    loader.handle = Some(asset_server.load(settings.catalog_path.clone()));
}

/// Swaps in the catalog asset once it loads or is hot-reloaded. A failed or
/// invalid asset leaves the current catalog in place.
pub fn watch_catalog_asset(
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<BirdCatalog>>,
    active: Res<ActiveCatalog>,
    mut loader: ResMut<CatalogLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut asset_events: EventReader<AssetEvent<BirdCatalog>>,
    mut updates: EventWriter<CatalogUpdate>,
) {
    let Some(handle_id) = loader.handle.as_ref().map(Handle::id) else {
        return;
    };

    for event in asset_events.read() {
        let id = match event {
            AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id } => *id,
            _ => continue,
        };
        if id != handle_id {
            continue;
        }
        progress.catalog_asset_settled = true;

        let Some(catalog) = catalogs.get(id) else {
            continue;
        };
        if let Err(err) = catalog.validate() {
            warn!("Catalog asset rejected, keeping current catalog: {err}");
            continue;
        }
        if *catalog == active.catalog {
            debug!("Catalog asset matches the active catalog, no rebuild");
            continue;
        }

        info!("Catalog asset loaded: {} birds", catalog.bird_count());
        updates.write(CatalogUpdate {
            catalog: catalog.clone(),
            source: CatalogSource::Asset,
        });
    }

    if !loader.failed {
        if let LoadState::Failed(err) = asset_server.load_state(handle_id) {
            warn!("Catalog asset failed to load, staying on bundled catalog: {err}");
            loader.failed = true;
            progress.catalog_asset_settled = true;
        }
    }
}
