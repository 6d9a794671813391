//! Manifest reading configuration
//!
//! The manifest format is old and loosely followed in practice: many tools write lines longer
//! than 72 bytes, omit the final line break, or repeat headers. [`ManifestConfig`] decides which
//! of these deviations the reader tolerates.

/// Default upper bound on the size of a manifest accepted by the reader (16 MiB).
pub const DEFAULT_MAX_MANIFEST_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for manifest parsing
///
/// The reader always enforces the structural rules of the format (header syntax, valid names,
/// continuation placement, UTF-8). These flags control the rules that real-world manifests
/// commonly violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Reject a last line that is not terminated by a line break
    pub require_trailing_newline: bool,

    /// Reject lines longer than 72 bytes (excluding the line break)
    pub enforce_line_length: bool,

    /// Reject a header repeated within one section instead of keeping the last value
    pub reject_duplicate_headers: bool,

    /// Largest accepted manifest in bytes
    pub max_manifest_size: usize,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ManifestConfig {
    /// Creates a configuration that accepts manifests as commonly found in the wild
    ///
    /// Unterminated last lines and long lines are accepted, and repeated headers keep the last
    /// value.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_trailing_newline: false,
            enforce_line_length: false,
            reject_duplicate_headers: false,
            max_manifest_size: DEFAULT_MAX_MANIFEST_SIZE,
        }
    }

    /// Creates a configuration that enforces the manifest format to the letter
    ///
    /// Useful for validating manifests produced by a build before they are shipped.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_trailing_newline: true,
            enforce_line_length: true,
            reject_duplicate_headers: true,
            max_manifest_size: DEFAULT_MAX_MANIFEST_SIZE,
        }
    }
}
