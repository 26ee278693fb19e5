//! Habitat scene engine.
//!
//! ```text
//! loading ──CatalogUpdate──> scene::scene_builder ──> PlacedBirds
//!    │                            │                      │
//! catalog                  habitat::assemble        animation (per frame)
//!                                                   tools::bird_picker (input)
//! ```

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod core;
pub mod habitat;
pub mod loading;
pub mod scene;
pub mod systems;
