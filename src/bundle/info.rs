//! Bundle identity.
//!
//! A bundle is uniquely identified by the combination of:
//! - **Symbolic Name**: The `Bundle-SymbolicName` header without its parameters
//!   (e.g. `com.example.foo` for `com.example.foo;singleton:=true`)
//! - **Version**: The `Bundle-Version` header parsed as a [`Version`]
//!
//! Alongside the identity, a [`BundleInfo`] can carry an arbitrary caller-supplied context, such
//! as the location the bundle was found at or a handle to the repository that provides it. The
//! context never takes part in comparisons.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    bundle::{version::Version, BundleHeader},
    manifest::{Attributes, Manifest},
    Error, Result,
};

/// Identity of a resolvable bundle, carrying some context that can be used to specify the
/// bundle further.
///
/// # Equality and Ordering
///
/// Two `BundleInfo` instances are equal if and only if their symbolic names and versions are
/// equal. The context is **excluded** from [`PartialEq`], [`Hash`] and [`Ord`], so the same
/// bundle found in two places compares equal.
///
/// Bundles order by symbolic name first (lexicographically), then by version. Sorting a
/// collection therefore groups all versions of a bundle together, oldest first.
///
/// # Context
///
/// The context is stored exactly as handed in: it is moved into the `BundleInfo`, never cloned
/// or inspected. To share one context object between several identities, pass a shared handle
/// such as [`std::sync::Arc`] or a reference.
///
/// # Examples
///
/// ```rust
/// use bundlescope::bundle::{BundleInfo, Version};
///
/// let mut bundles = vec![
///     BundleInfo::new("b", Version::new(1, 0, 0), Some("repo-1")),
///     BundleInfo::new("a", Version::new(2, 0, 0), Some("repo-2")),
///     BundleInfo::new("a", Version::new(1, 0, 0), None),
/// ];
/// bundles.sort();
///
/// let rendered: Vec<String> = bundles.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["a:1.0.0", "a:2.0.0:repo-2", "b:1.0.0:repo-1"]);
/// ```
#[derive(Debug, Clone)]
pub struct BundleInfo<C> {
    symbolic_name: String,
    version: Version,
    context: Option<C>,
}

impl<C> BundleInfo<C> {
    /// Create a bundle identity from explicit values.
    ///
    /// The name is taken as-is; no format validation is performed.
    pub fn new(symbolic_name: impl Into<String>, version: Version, context: Option<C>) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            version,
            context,
        }
    }

    /// Create a bundle identity without context.
    pub fn without_context(symbolic_name: impl Into<String>, version: Version) -> Self {
        Self::new(symbolic_name, version, None)
    }

    /// Create a bundle identity from the main section of a manifest.
    ///
    /// Only the part of each header before the first `;` is used, so directives and attributes
    /// such as `;singleton:=true` are dropped.
    ///
    /// # Errors
    /// - [`crate::Error::MissingHeader`] if `Bundle-SymbolicName` or `Bundle-Version` is absent
    /// - [`crate::Error::VersionFormat`] if `Bundle-Version` is not a valid version
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bundlescope::{bundle::BundleInfo, manifest::Manifest};
    ///
    /// let manifest = Manifest::parse(
    ///     b"Bundle-SymbolicName: com.example.foo;singleton:=true\n\
    ///       Bundle-Version: 1.2.3.qualifier\n",
    /// )?;
    /// let bundle = BundleInfo::from_manifest(&manifest, Some("workspace"))?;
    /// assert_eq!(bundle.symbolic_name(), "com.example.foo");
    /// assert_eq!(bundle.version().to_string(), "1.2.3.qualifier");
    /// assert_eq!(bundle.to_string(), "com.example.foo:1.2.3.qualifier:workspace");
    /// # Ok::<(), bundlescope::Error>(())
    /// ```
    pub fn from_manifest(manifest: &Manifest, context: Option<C>) -> Result<Self> {
        let attributes = manifest.main_attributes();

        let symbolic_name = required_header(attributes, BundleHeader::SymbolicName)?;
        let version = Version::parse(required_header(attributes, BundleHeader::Version)?)?;

        Ok(Self {
            symbolic_name: symbolic_name.to_string(),
            version,
            context,
        })
    }

    /// The symbolic name of the bundle.
    #[must_use]
    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    /// The version of the bundle.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The context attached to this bundle, if any.
    #[must_use]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Returns `true` if a context is attached.
    #[must_use]
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Consume the identity, returning the attached context.
    #[must_use]
    pub fn into_context(self) -> Option<C> {
        self.context
    }

    /// Attach a different context to the same identity.
    #[must_use]
    pub fn with_context<D>(self, context: Option<D>) -> BundleInfo<D> {
        BundleInfo {
            symbolic_name: self.symbolic_name,
            version: self.version,
            context,
        }
    }
}

/// Value of a required header, cut at the first `;`.
fn required_header(attributes: &Attributes, header: BundleHeader) -> Result<&str> {
    let value = attributes
        .get(header.name())
        .ok_or_else(|| Error::MissingHeader(header.name().to_string()))?;

    Ok(value.split(';').next().unwrap_or(value))
}

impl<C> PartialEq for BundleInfo<C> {
    fn eq(&self, other: &Self) -> bool {
        self.symbolic_name == other.symbolic_name && self.version == other.version
        // Note: context is excluded from equality comparison
    }
}

impl<C> Eq for BundleInfo<C> {}

impl<C> Hash for BundleInfo<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbolic_name.hash(state);
        self.version.hash(state);
    }
}

impl<C> PartialOrd for BundleInfo<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for BundleInfo<C> {
    /// Symbolic name first, version on a tie.
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbolic_name
            .cmp(&other.symbolic_name)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl<C: fmt::Display> fmt::Display for BundleInfo<C> {
    /// `name:version`, or `name:version:context` when a context is attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            None => write!(f, "{}:{}", self.symbolic_name, self.version),
            Some(context) => write!(f, "{}:{}:{}", self.symbolic_name, self.version, context),
        }
    }
}
