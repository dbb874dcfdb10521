//! # isbnscan Architecture
//!
//! `isbnscanapp` is the library behind the `isbnscan` client and the
//! `isbnscan-server` mirror. It looks up book metadata by ISBN and keeps a
//! deduplicated history of scans that can be persisted, exported, re-imported
//! and mirrored to a server.
//!
//! Both binaries use the same sanitizer and normalizer, so a history means the
//! same thing on either side of the wire.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (isbnscan CLI, isbnscan-server)                    │
//! │  - Terminal / HTTP I/O, exit codes, status codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Owns the session state, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (sanitize.rs, normalize.rs, merge.rs)                 │
//! │  - Total functions over untrusted JSON and typed records    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Session, key/value, interchange files, server mirror     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Raw data from any source (catalog response, file, stored blob, HTTP body)
//! passes through the normalizer before it becomes state. State passes
//! through it again before any store persists it. Imported collections go
//! through [`merge::merge`] before replacing state, with imported records
//! winning every ISBN conflict.
//!
//! ## Failure Policy
//!
//! - Malformed data is absorbed: dropped or defaulted, never raised.
//! - Storage that is full or unavailable is logged and reported as a
//!   warning; the session carries on.
//! - Only an unparsable import file ([`error::ScanError::InvalidFormat`]) and
//!   a failed mirror write surface as errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each client command
//! - [`model`]: `ScanRecord`, `BookRecord`, `ScanCollection`
//! - [`sanitize`], [`normalize`], [`merge`]: validation and merge core
//! - [`store`]: Storage adapters
//! - [`lookup`]: Catalog client and response projection
//! - [`remote`]: Client for the remote mirror
//! - [`config`]: Client configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod remote;
pub mod sanitize;
pub mod store;

pub use merge::merge;
pub use normalize::{normalize, normalize_with_report, NormalizeReport};
pub use sanitize::sanitize;
