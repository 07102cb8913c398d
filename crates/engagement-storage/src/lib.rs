//! Local blob persistence for the engagement engine.
//!
//! The engine persists its entire state as one serialized blob under a
//! single fixed key. This crate provides that seam: the [`BlobStore`]
//! trait with whole-value reads and writes, a filesystem backend for
//! real installations, and an in-memory backend for tests and
//! ephemeral sessions.
//!
//! There are no partial updates and no transactions -- every write
//! replaces the whole blob, and the last writer wins. Callers that
//! need stronger guarantees across concurrent processes must layer
//! their own coordination on top.
//!
//! # Modules
//!
//! - [`blob`] -- the [`BlobStore`] trait, [`FileStore`], [`MemoryStore`]
//! - [`config`] -- typed storage configuration with YAML loading
//! - [`error`] -- shared error types

pub mod blob;
pub mod config;
pub mod error;

// Re-export primary types for convenience.
pub use blob::{BlobStore, FileStore, MemoryStore};
pub use config::{ConfigError, StorageConfig};
pub use error::StorageError;
