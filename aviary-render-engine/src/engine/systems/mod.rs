//! Runtime diagnostics.

/// Frame rate lookup shared by the native overlay and the `get_fps` RPC.
pub mod fps_tracking;
