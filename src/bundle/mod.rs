//! OSGi bundle identities.
//!
//! An OSGi bundle is a JAR (or a folder laid out like one) whose manifest declares a symbolic
//! name and a version. This module reads those two headers into a [`BundleInfo`], the key by
//! which bundles are compared, sorted and deduplicated.
//!
//! # Key Components
//!
//! - [`BundleInfo`] - Symbolic name, version and an optional caller context
//! - [`Version`] - `major.minor.micro.qualifier` bundle version
//! - [`BundleHeader`] - The manifest headers that make up a bundle identity
//! - [`is_bundle`], [`read_manifest`], [`read_exploded_bundle`] - Loading from manifests and
//!   exploded bundle folders
//!
//! # Examples
//!
//! ```rust,no_run
//! use bundlescope::bundle::read_exploded_bundle;
//!
//! let mut bundles = Vec::new();
//! for entry in std::fs::read_dir("plugins")? {
//!     let path = entry?.path();
//!     bundles.push(read_exploded_bundle(&path, Some(path.display().to_string()))?);
//! }
//! bundles.sort();
//! # Ok::<(), bundlescope::Error>(())
//! ```

mod exploded;
mod info;
mod version;

pub use exploded::{is_bundle, read_exploded_bundle, read_manifest};
pub use info::BundleInfo;
pub use version::{Version, MAX_COMPONENT};

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Folder holding the manifest within a bundle.
pub const META_INF: &str = "META-INF";

/// File name of the manifest within [`META_INF`].
pub const MANIFEST_FILE: &str = "MANIFEST.MF";

/// Manifest headers that together identify a bundle.
///
/// The string form of each variant is the header name as written in the manifest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr, strum::Display,
)]
pub enum BundleHeader {
    /// `Bundle-SymbolicName`
    #[strum(serialize = "Bundle-SymbolicName")]
    SymbolicName,
    /// `Bundle-Version`
    #[strum(serialize = "Bundle-Version")]
    Version,
}

impl BundleHeader {
    /// Header name as written in the manifest.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All identity headers, in manifest order.
    pub fn all() -> impl Iterator<Item = BundleHeader> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_header_names() {
        assert_eq!(BundleHeader::SymbolicName.name(), "Bundle-SymbolicName");
        assert_eq!(BundleHeader::Version.to_string(), "Bundle-Version");
        assert_eq!(BundleHeader::COUNT, 2);

        let names: Vec<&str> = BundleHeader::all().map(BundleHeader::name).collect();
        assert_eq!(names, ["Bundle-SymbolicName", "Bundle-Version"]);
    }
}
