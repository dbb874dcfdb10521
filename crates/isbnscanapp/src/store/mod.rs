//! # Storage Layer
//!
//! Scan history lives in several places at once: the session that owns it,
//! a key/value store that keeps it between runs, export files the user moves
//! around, and the remote mirror. Only the session is authoritative; every
//! other copy is a snapshot.
//!
//! ## Adapters
//!
//! - [`session::SessionStore`]: the in-memory collection. Cannot fail.
//! - [`persistent::PersistentStore`]: a single key in a [`backend::KvBackend`].
//!   Failures are logged and reported as `false`/empty, never raised.
//! - [`file`]: export to and import from interchange files. Import is the one
//!   operation that raises ([`crate::error::ScanError::InvalidFormat`]).
//! - [`mirror::MirrorFile`]: the server-side whole-file copy.
//!
//! Every adapter normalizes on the way in and on the way out.
//!
//! ## Storage Format
//!
//! All media hold the same JSON document:
//! ```text
//! { "version": 1, "items": [ { "isbn": "...", "book": { ... } | null }, ... ] }
//! ```

use crate::model::{ScanCollection, ScanRecord};

pub mod backend;
pub mod file;
pub mod fs_backend;
pub mod mem_backend;
pub mod mirror;
pub mod persistent;
pub mod session;

/// Load/save contract shared by the session and the persistent store.
pub trait ScanStore {
    /// Current collection, normalized. Empty when nothing was stored or the
    /// stored data is unreadable.
    fn load(&self) -> ScanCollection;

    /// Replace the stored collection. Returns `false` if the medium refused
    /// the write; the previous contents are then left as they were.
    fn save(&mut self, items: &[ScanRecord]) -> bool;

    /// Remove everything. Returns `false` if the medium refused.
    fn clear(&mut self) -> bool;
}
