//! Viewport for the habitat scene.
//!
//! Dragging rotates the scene root instead of orbiting the camera, the wheel
//! dollies the camera along its depth axis.

/// Scene rotation, camera distance and the systems applying them.
pub mod viewport_camera;

pub use viewport_camera::{SceneRoot, SceneViewport, ViewportCamera};
