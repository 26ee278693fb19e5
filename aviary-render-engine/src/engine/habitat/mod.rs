//! Habitat classification and procedural scene layout.
//!
//! Turns a catalog into the flat list of placed birds the scene renders:
//!
//! ```text
//! BirdCatalog
//!   └─> classify()          name/family keyword tables → HabitatCategory
//!   └─> compute_positions() per-habitat LayoutPattern → Vec3 per bird
//!   └─> assemble()          groups + flattened Vec<PlacedBird>
//! ```
//!
//! Group order is `HabitatCategory::ALL`; inside a group, catalog order decides
//! the index each layout pattern sees.

/// Groups birds per habitat and attaches positions and environment metadata.
pub mod assembler;

/// Keyword-priority habitat classification.
pub mod classifier;

/// Habitat categories with their zone configuration, layout pattern and animation profile.
pub mod environment;

/// Position generators for each layout pattern.
pub mod layout;

pub use assembler::{AssembledScene, EnvironmentSummary, HabitatGroup, PlacedBird, assemble};
pub use classifier::{classify, group_by_habitat};
pub use environment::{AnimationProfile, EnvironmentConfig, HabitatCategory, LayoutPattern};
pub use layout::compute_positions;
