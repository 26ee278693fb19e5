//! JSON-RPC 2.0 bridge to the frontend that owns the bird detail panels.
//!
//! Implements bidirectional messaging between Bevy engine and React UI via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! React (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Request Handling
//!
//! `handle_rpc_request()` matches on the method name and delegates to a
//! `handle_*` function returning `Result<Value, RpcError>`. Parameters are
//! deserialised into a small `#[derive(Deserialize)]` struct; a shape mismatch
//! becomes `RpcError::invalid_params`. Side effects never touch the scene
//! directly: they are written as `SelectionRequest` or `CatalogUpdate` events
//! and picked up by the systems that own that state.
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "select_bird",
//!   params: { id: "mallard" },
//!   id: 7
//! }), "*");
//! ```
//!
//! Engine-side events reach the frontend through
//! `WebRpcInterface::send_notification()`, flushed once per frame ahead of the
//! responses queued in that frame.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params (missing id, unknown bird, invalid catalog)
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Catalog
//! - `load_catalog`: Replace the catalog with `{ birdFamilies: [...] }` and rebuild the scene
//! - `get_environment_summary`: Habitat zones with their bird counts
//! - `get_bird`: One placed bird by `id`
//!
//! ### Selection
//! - `select_bird`: Highlight a bird by `id` as if it had been clicked
//! - `clear_selection`: Remove every highlight
//! - `play_bird_audio`: Resolve the audio URL of a bird for frontend playback
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//! - `bird_selected`: A click or `select_bird` resolved to a bird
//! - `scene_built`: A catalog update finished rebuilding the scene
//! - `debug_message`: Trace of incoming methods and parse errors

/// JSON-RPC 2.0 bidirectional communication system for React integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
