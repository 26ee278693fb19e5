//! Catalog loading with a bundled fallback.
//!
//! The bundled catalog is published at startup so the first scene never
//! waits on I/O. The catalog asset then replaces it when it loads, and again
//! whenever it is modified on disk. Catalogs pushed by the frontend travel the
//! same `CatalogUpdate` path.

/// Bundled-first catalog loading, asset watching and the active catalog.
pub mod catalog_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
