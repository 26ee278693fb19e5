//! Pointer picking and selection for the birds in the habitat scene.
//!
//! ## Gesture
//!
//! ```text
//! press ──> PointerDown { origin } ──move > 5px──> dragging: scene rotates
//!              │                                          │
//!              └──── release ≤ 5px from origin ───> click: hit test
//!                    release  > 5px from origin ───> drag: nothing
//! ```
//!
//! A click casts a ray from the camera through the release point and tests
//! every part of every bird. The nearest part wins and resolves to its bird in
//! O(1) through the part's owner index. On a hit the bird becomes the only
//! highlighted one and a `BirdSelected` event is written; on a miss all
//! highlights are cleared. The wheel zooms independently of the gesture.
//!
//! The resolver is the only writer of the highlight flag, including for
//! selections requested by the frontend through `SelectionRequest`.

/// Pickable part volumes and ray intersection.
pub mod ray;


/// Click/drag state machine and selection.
pub mod resolver;

/// Events and marker components.
pub mod state;

/// Bevy systems wiring input, selection requests and highlight presentation.
pub mod systems;

/// Selected bird caption (native only).
pub mod ui;

use crate::engine::core::app_state::AppState;
use bevy::prelude::*;

pub use resolver::{InteractionResolver, Resolution, ScreenRaycaster};
pub use state::{BirdSelected, SelectionRequest};

use systems::{
    forget_selection_on_rebuild, handle_pointer_input, handle_selection_requests,
    handle_wheel_zoom, sync_highlights,
};

pub struct BirdPickerPlugin;

impl Plugin for BirdPickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionResolver>()
            .add_event::<BirdSelected>()
            .add_event::<SelectionRequest>()
            .add_systems(
                Update,
                (
                    forget_selection_on_rebuild,
                    handle_pointer_input,
                    handle_wheel_zoom,
                    handle_selection_requests,
                    sync_highlights,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(Startup, ui::spawn_selection_label).add_systems(
                Update,
                ui::reflect_selected_bird_label.run_if(in_state(AppState::Running)),
            );
        }
    }
}
