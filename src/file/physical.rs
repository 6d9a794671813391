//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for reading manifests from disk using memory-mapped I/O.
//!
//! # Lifetime of the Mapping
//!
//! The file handle is only needed while the mapping is created; once [`Physical::new`] returns,
//! the mapping alone keeps the content reachable. Dropping the [`Physical`] unmaps the file, which
//! is how [`crate::bundle::read_manifest`] scopes its access to `META-INF/MANIFEST.MF`.

use super::Backend;
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for access to files on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use bundlescope::file::{Backend, Physical};
///
/// let physical = Physical::new("META-INF/MANIFEST.MF")?;
/// println!("Manifest size: {} bytes", physical.data().len());
/// # Ok::<(), bundlescope::Error>(())
/// ```
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// The file is mapped read-only. The handle used to create the mapping is closed before this
    /// function returns, on success and on failure.
    ///
    /// # Arguments
    /// * `path` - Path to the file on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        // SAFETY: the mapping is read-only and never handed out beyond the borrow of `self`.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|error| Error(error.to_string()))?;

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }
}
