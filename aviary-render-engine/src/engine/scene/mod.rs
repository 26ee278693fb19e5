//! Drawable habitat scene.
//!
//! Everything hangs off one `SceneRoot` entity whose rotation is the scene
//! rotation. A catalog update despawns the root recursively and spawns a new
//! generation: habitat props first, then one composite bird per `PlacedBird`.

/// Composite multi-part bird meshes and their pick components.
pub mod bird_mesh;

/// Static scenery per habitat (pool, cloud, trees, garden, ground patch).
pub mod environments;

/// Scene (re)construction, lighting and the placed bird resource.
pub mod scene_builder;

pub use bird_mesh::{BirdInstance, BirdPart, BirdPartKind};
pub use scene_builder::{PlacedBirds, SceneBuilt};
