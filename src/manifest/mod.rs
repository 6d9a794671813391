//! JAR manifest parsing and writing.
//!
//! A manifest is a text file of `Name: value` headers, split into a *main section* and any
//! number of *entry sections* separated by blank lines. Bundles carry their identity
//! (`Bundle-SymbolicName`, `Bundle-Version`) in the main section of `META-INF/MANIFEST.MF`.
//!
//! # Format
//!
//! ```text
//! Manifest-Version: 1.0
//! Bundle-SymbolicName: com.example.foo;singleton:=true
//! Bundle-Version: 1.2.3.qualifier
//! Export-Package: com.example.foo.api,com.example.foo.spi;version="1.
//!  2.3"
//!
//! Name: com/example/foo/Main.class
//! SHA-256-Digest: 47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=
//! ```
//!
//! - Lines end in `CR LF`, `LF` or `CR` and should not exceed 72 bytes
//! - A line starting with a single space continues the previous value
//! - Header names are case-insensitive, values are UTF-8
//! - Each entry section starts with a `Name` header
//!
//! # Key Components
//!
//! - [`Manifest`] - Parsed manifest with main and entry sections
//! - [`Attributes`] - Ordered headers of one section
//! - [`AttributeName`] - Validated, case-insensitive header name
//! - [`ManifestConfig`] - Which format deviations the reader tolerates
//!
//! # Examples
//!
//! ```rust
//! use bundlescope::manifest::Manifest;
//!
//! let manifest = Manifest::parse(
//!     b"Manifest-Version: 1.0\r\nBundle-SymbolicName: com.example.foo\r\n",
//! )?;
//! assert_eq!(
//!     manifest.main_attributes().get("Bundle-SymbolicName"),
//!     Some("com.example.foo")
//! );
//!
//! // Writing produces text that parses back to an equal manifest
//! let reparsed = Manifest::parse(&manifest.to_bytes())?;
//! assert_eq!(manifest, reparsed);
//! # Ok::<(), bundlescope::Error>(())
//! ```

mod attributes;
mod config;
mod name;
mod reader;
mod writer;

pub use attributes::Attributes;
pub use config::{ManifestConfig, DEFAULT_MAX_MANIFEST_SIZE};
pub use name::{AttributeName, MAX_NAME_LENGTH};

use std::{io::Write, path::Path};

use crate::{
    file::{Backend, Memory, Physical},
    Result,
};

/// Maximum length of a manifest line in bytes, excluding the line break.
pub const MAX_LINE_LENGTH: usize = 72;

/// Header carrying the manifest format version.
pub const MANIFEST_VERSION: &str = "Manifest-Version";

/// Header introducing an entry section.
pub const NAME: &str = "Name";

/// A parsed manifest.
///
/// Entry sections keep the order in which they were first seen. Entry names are compared
/// exactly (they are paths, not header names).
///
/// Equality ignores the order of headers and of entry sections.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    main: Attributes,
    entries: Vec<(String, Attributes)>,
}

impl Manifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest text with the default, lenient configuration.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the text violates the manifest format.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with_config(data, &ManifestConfig::default())
    }

    /// Parse manifest text with an explicit configuration.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the text violates the manifest format or a rule
    /// enabled in `config`.
    pub fn parse_with_config(data: &[u8], config: &ManifestConfig) -> Result<Self> {
        reader::read(data, config)
    }

    /// Parse a manifest from an owned buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the text violates the manifest format.
    pub fn from_mem(data: Vec<u8>) -> Result<Self> {
        Self::from_backend(&Memory::new(data), &ManifestConfig::default())
    }

    /// Read and parse a manifest file.
    ///
    /// The file is memory-mapped for the duration of the parse and released before this
    /// function returns, whatever the outcome.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or read, and
    /// [`crate::Error::Malformed`] if its content is not a valid manifest.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use bundlescope::manifest::Manifest;
    ///
    /// let manifest = Manifest::from_file("bundle/META-INF/MANIFEST.MF")?;
    /// for (name, value) in manifest.main_attributes().iter() {
    ///     println!("{}: {}", name, value);
    /// }
    /// # Ok::<(), bundlescope::Error>(())
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_config(path, &ManifestConfig::default())
    }

    /// Read and parse a manifest file with an explicit configuration.
    ///
    /// # Errors
    /// See [`Manifest::from_file`].
    pub fn from_file_with_config(path: impl AsRef<Path>, config: &ManifestConfig) -> Result<Self> {
        let input = Physical::new(path)?;
        Self::from_backend(&input, config)
    }

    /// Parse a manifest from any [`Backend`].
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the data is not a valid manifest.
    pub fn from_backend(input: &dyn Backend, config: &ManifestConfig) -> Result<Self> {
        Self::parse_with_config(input.data(), config)
    }

    /// Headers of the main section.
    #[must_use]
    pub fn main_attributes(&self) -> &Attributes {
        &self.main
    }

    /// Mutable access to the headers of the main section.
    pub fn main_attributes_mut(&mut self) -> &mut Attributes {
        &mut self.main
    }

    /// Headers of the entry section `name`, if present.
    #[must_use]
    pub fn attributes(&self, name: &str) -> Option<&Attributes> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, attributes)| attributes)
    }

    /// Headers of the entry section `name`, created empty if missing.
    pub fn entry_mut(&mut self, name: &str) -> &mut Attributes {
        let idx = match self.entries.iter().position(|(entry, _)| entry == name) {
            Some(idx) => idx,
            None => {
                self.entries.push((name.to_string(), Attributes::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Remove the entry section `name`, returning its headers.
    pub fn remove_entry(&mut self, name: &str) -> Option<Attributes> {
        self.entries
            .iter()
            .position(|(entry, _)| entry == name)
            .map(|idx| self.entries.remove(idx).1)
    }

    /// Iterate over entry sections in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.entries
            .iter()
            .map(|(name, attributes)| (name.as_str(), attributes))
    }

    /// Write the manifest in its text form.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing to `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writer::write(self, out)
    }

    /// The manifest in its text form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = writer::write(self, &mut out);
        out
    }
}

impl PartialEq for Manifest {
    fn eq(&self, other: &Self) -> bool {
        self.main == other.main
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(name, attributes)| other.attributes(name) == Some(attributes))
    }
}

impl Eq for Manifest {}
