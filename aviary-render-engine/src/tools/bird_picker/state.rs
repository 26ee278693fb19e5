use crate::engine::habitat::PlacedBird;
use bevy::prelude::*;

/// Emitted once per resolved selection, carrying the bird as placed in the scene.
#[derive(Event, Debug, Clone)]
pub struct BirdSelected {
    pub bird: PlacedBird,
}

/// Selection changes requested from outside the pointer gesture (frontend RPC).
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SelectionRequest {
    Select { bird_id: String },
    Clear,
}

// Components
#[derive(Component)]
pub struct SelectedBirdLabel;
