use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::animation::animate_birds;
use crate::engine::camera::SceneViewport;
use crate::engine::camera::viewport_camera::{apply_scene_viewport, spawn_viewport_camera};
use crate::engine::catalog::BirdCatalog;
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::settings::SceneSettings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::catalog_loader::{
    ActiveCatalog, CatalogLoader, CatalogUpdate, start_catalog_loading, watch_catalog_asset,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::scene_builder::{
    PlacedBirds, SceneBuilt, rebuild_scene_on_catalog_update, spawn_lighting,
};
// Crate tools modules
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::bird_picker::BirdPickerPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

const LOG_FILTER: &str = "wgpu=error,naga=warn,aviary_render_engine=debug";

pub fn create_app() -> App {
    create_app_with_settings(SceneSettings::from_env())
}

pub fn create_app_with_settings(settings: SceneSettings) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers BirdCatalog as a loadable asset type from `.catalog.json` files.
        .add_plugins(JsonAssetPlugin::<BirdCatalog>::new(&["catalog.json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(BirdPickerPlugin);

    // Initialise resources early
    app.insert_resource(settings)
        .init_resource::<SceneViewport>()
        .init_resource::<PlacedBirds>()
        .init_resource::<ActiveCatalog>()
        .init_resource::<CatalogLoader>()
        .init_resource::<LoadingProgress>()
        .add_event::<CatalogUpdate>()
        .add_event::<SceneBuilt>();

    app.add_systems(
        Startup,
        (spawn_lighting, setup, start_catalog_loading).chain(),
    );

    // Catalog changes rebuild the scene in every state, including the first
    // build that ends `Loading`.
    app.add_systems(
        Update,
        (
            watch_catalog_asset,
            rebuild_scene_on_catalog_update,
            transition_to_running,
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (animate_birds, apply_scene_viewport).run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, viewport: Res<SceneViewport>) {
    spawn_viewport_camera(&mut commands, &viewport);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
