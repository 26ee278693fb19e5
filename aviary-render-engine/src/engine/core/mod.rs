//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime settings,
//! state transitions and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with catalog loading, scene building, animation,
/// picking and the frontend bridge.
pub mod app_setup;

/// Application state machine: `Loading` until the first scene exists, then `Running`.
pub mod app_state;

/// Runtime scene settings (catalog path, layout seed) with environment overrides.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
