//! Interactive tools for the habitat scene.
//!
//! ## Bird Picker
//!
//! The only tool, always active while the app is `Running`:
//! - **Left drag**: rotate the scene (yaw on x travel, pitch on y travel, pitch clamped)
//! - **Left click**: select the nearest bird under the cursor, or clear on a miss
//! - **Wheel**: zoom the camera between the near and far distance limits
//!
//! Native builds also show a caption with the selected bird. In WASM builds
//! the frontend renders the detail panel from the `bird_selected` notification
//! and can drive the same selection through `select_bird` / `clear_selection`.

/// Pointer picking, click/drag disambiguation and highlight presentation.
///
/// Ray-vs-part hit testing over composite bird meshes with nearest-hit resolution.
pub mod bird_picker;
