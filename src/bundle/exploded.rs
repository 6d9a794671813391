//! Bundles unpacked into a folder.
//!
//! An exploded bundle is a directory holding the bundle's content as loose files, with the
//! manifest at `META-INF/MANIFEST.MF`. These helpers locate and read that manifest and turn it
//! into a [`BundleInfo`].

use std::path::{Path, PathBuf};

use crate::{
    bundle::{BundleHeader, BundleInfo, MANIFEST_FILE, META_INF},
    manifest::Manifest,
    Error, Result,
};

/// Check whether a manifest describes a bundle.
///
/// Returns `true` only if the manifest is present and its main section carries both
/// `Bundle-SymbolicName` and `Bundle-Version`. Header values are not inspected.
///
/// # Examples
///
/// ```rust
/// use bundlescope::{bundle::is_bundle, manifest::Manifest};
///
/// let plain = Manifest::parse(b"Manifest-Version: 1.0\n")?;
/// assert!(!is_bundle(Some(&plain)));
/// assert!(!is_bundle(None));
///
/// let bundle = Manifest::parse(b"Bundle-SymbolicName: a\nBundle-Version: 1.0\n")?;
/// assert!(is_bundle(Some(&bundle)));
/// # Ok::<(), bundlescope::Error>(())
/// ```
#[must_use]
pub fn is_bundle(manifest: Option<&Manifest>) -> bool {
    manifest.is_some_and(|manifest| {
        let main = manifest.main_attributes();
        BundleHeader::all().all(|header| main.contains(header.name()))
    })
}

/// Read the manifest of an exploded bundle.
///
/// Opens `<folder>/META-INF/MANIFEST.MF`. The file handle is released before this function
/// returns, on success and on failure.
///
/// # Errors
/// - [`crate::Error::NotFound`] if `<folder>/META-INF` does not exist, carrying the absolute
///   path of `folder`
/// - [`crate::Error::FileError`] if `META-INF` exists but the manifest cannot be opened or read
/// - [`crate::Error::Malformed`] if the manifest content is invalid
pub fn read_manifest(folder: impl AsRef<Path>) -> Result<Manifest> {
    let folder = folder.as_ref();
    let meta_inf = folder.join(META_INF);

    if !meta_inf.exists() {
        return Err(Error::NotFound(absolute(folder)));
    }

    Manifest::from_file(meta_inf.join(MANIFEST_FILE))
}

/// Read the identity of an exploded bundle.
///
/// Reads the manifest with [`read_manifest`] and builds a [`BundleInfo`] from it with
/// [`BundleInfo::from_manifest`], attaching `context`.
///
/// # Errors
/// Any error of [`read_manifest`] or [`BundleInfo::from_manifest`].
///
/// # Examples
///
/// ```rust,no_run
/// use bundlescope::bundle::read_exploded_bundle;
///
/// let bundle = read_exploded_bundle("plugins/com.example.foo_1.2.3", Some("plugins"))?;
/// println!("{}", bundle); // com.example.foo:1.2.3:plugins
/// # Ok::<(), bundlescope::Error>(())
/// ```
pub fn read_exploded_bundle<C>(
    folder: impl AsRef<Path>,
    context: Option<C>,
) -> Result<BundleInfo<C>> {
    let manifest = read_manifest(folder)?;
    BundleInfo::from_manifest(&manifest, context)
}

/// Absolute form of `path` for error reporting, falling back to `path` itself.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
