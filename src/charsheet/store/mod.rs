//! # Storage Layer
//!
//! The persistence port for the editor. A [`ProfileStore`] is a key/value store of
//! opaque blobs; the session keeps the whole profile as one JSON blob under a single
//! storage key, loaded once at startup and overwritten after every edit.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<storage-key>.json` file per key in the data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! Stores report failures as errors. Deciding that a failed save must not disturb
//! the editing session is the caller's job (see `api.rs`).

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ProfileStore {
    /// The blob stored under `key`, or `None` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace whatever is stored under `key`.
    fn save(&mut self, key: &str, blob: &str) -> Result<()>;

    /// Remove `key` entirely. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
