use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leaves `Loading` as soon as the first scene exists. The catalog asset may
/// still be pending; it replaces the scene whenever it arrives.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if *state.get() == AppState::Loading && loading_progress.scene_built {
        info!(
            "→ First scene built (bundled ready: {}, catalog asset settled: {}), transitioning to Running state",
            loading_progress.bundled_catalog_ready, loading_progress.catalog_asset_settled
        );
        next_state.set(AppState::Running);
    }
}
