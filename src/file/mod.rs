//! Data sources for manifest input.
//!
//! Manifests are small text files, but they are read the same way regardless of where the bytes
//! come from: a file inside an exploded bundle on disk, or a buffer the caller already holds
//! (for instance a `MANIFEST.MF` extracted from an archive by other tooling).
//!
//! # Key Components
//!
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//! - [`crate::file::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::Memory`] - In-memory buffer backend
//! - [`crate::file::parser::Parser`] - Cursor that splits manifest bytes into lines
//!
//! # Resource Handling
//!
//! A [`crate::file::Physical`] owns its mapping; dropping it releases the mapping. The manifest
//! readers hold a backend only for the duration of a parse, so the underlying file is released on
//! every exit path, including parse failures.

pub mod parser;

mod memory;
mod physical;

pub use memory::Memory;
pub use physical::Physical;

/// Backend trait for manifest data sources.
///
/// This trait abstracts over the source of manifest data, allowing for both in-memory and on-disk
/// representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];
}
