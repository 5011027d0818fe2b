//! Session-scoped selection storage.
//!
//! Persisted selections live in a key-value store scoped to one user
//! session; keys are derived from the resource slug, so entries for
//! different resources never collide. The trait is the seam that keeps
//! the engine decoupled from where the host actually keeps session
//! state.
//!
//! All methods take `&self`: implementations use interior mutability,
//! which fits the single-threaded, request-scoped processing model.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: in-memory store for tests and embedded use
//! - [`fs::FileStore`]: JSON-file-backed store, one root per session

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for persisted column selections.
pub trait SessionStore {
    /// Read the persisted selection for a cache key.
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn get(&self, key: &str) -> Result<Option<Vec<String>>>;

    /// Persist a selection under a cache key, overwriting any
    /// previous entry.
    fn set(&self, key: &str, selection: &[String]) -> Result<()>;
}
