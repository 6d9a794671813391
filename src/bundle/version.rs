//! OSGi-style bundle versions.
//!
//! A bundle version has three numeric components and an optional qualifier:
//!
//! ```text
//! major[.minor[.micro[.qualifier]]]
//! ```
//!
//! - **Major**, **minor**, **micro**: integers from `0` to [`MAX_COMPONENT`], missing components
//!   default to `0`
//! - **Qualifier**: a token of ASCII letters, digits, `_` and `-`; empty when absent
//!
//! # Version Comparison
//!
//! Versions are compared component-wise in order: major, minor, micro (numerically), then the
//! qualifier (lexicographically). An empty qualifier sorts before any non-empty one, so
//! `1.0.0 < 1.0.0.beta`.
//!
//! # Examples
//!
//! ```rust
//! use bundlescope::bundle::Version;
//!
//! let release = Version::parse("1.2.3")?;
//! let snapshot = Version::parse("1.2.3.SNAPSHOT")?;
//! assert!(release < snapshot);
//! assert_eq!(snapshot.to_string(), "1.2.3.SNAPSHOT");
//! assert_eq!(Version::parse("2")?.to_string(), "2.0.0");
//! # Ok::<(), bundlescope::Error>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Largest numeric component accepted by [`Version::parse`], the range of a signed 32-bit
/// integer that other OSGi tooling stores versions in.
pub const MAX_COMPONENT: u32 = i32::MAX as u32;

/// Four-part version of a bundle.
///
/// The derived ordering follows field order, which is exactly the major, minor, micro,
/// qualifier precedence of the version scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    /// The empty version `0.0.0`.
    pub const EMPTY: Self = Self {
        major: 0,
        minor: 0,
        micro: 0,
        qualifier: String::new(),
    };

    /// Create a version without qualifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bundlescope::bundle::Version;
    ///
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.major(), 1);
    /// assert_eq!(version.qualifier(), "");
    /// ```
    #[must_use]
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Create a version with a qualifier.
    ///
    /// # Errors
    /// Returns [`crate::Error::VersionFormat`] if the qualifier contains characters other than
    /// ASCII letters, digits, `_` and `-`.
    pub fn with_qualifier(
        major: u32,
        minor: u32,
        micro: u32,
        qualifier: impl Into<String>,
    ) -> Result<Self> {
        let qualifier = qualifier.into();
        if let Some(invalid) = qualifier.chars().find(|c| !is_qualifier_char(*c)) {
            return Err(version_error!(
                format!("{}.{}.{}.{}", major, minor, micro, qualifier),
                "invalid character '{}' in qualifier",
                invalid
            ));
        }

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored and an empty string yields [`Version::EMPTY`]. Numeric
    /// components may carry a leading `+` and must not exceed [`MAX_COMPONENT`].
    /// Accepted forms:
    /// - "1" - major only (minor and micro default to 0)
    /// - "1.2" - major and minor
    /// - "1.2.3" - all numeric components
    /// - "1.2.3.qualifier" - numeric components plus qualifier
    ///
    /// # Errors
    /// Returns [`crate::Error::VersionFormat`] for empty or non-numeric components, a qualifier
    /// without all three numeric components, an empty qualifier, or invalid qualifier characters.
    pub fn parse(version_str: &str) -> Result<Self> {
        let trimmed = version_str.trim();
        if trimmed.is_empty() {
            return Ok(Self::EMPTY);
        }

        let mut parts = trimmed.splitn(4, '.');
        let mut components = [0u32; 3];

        for component in &mut components {
            let Some(part) = parts.next() else {
                break;
            };
            *component = parse_component(trimmed, part)?;
        }

        let [major, minor, micro] = components;
        match parts.next() {
            None => Ok(Self::new(major, minor, micro)),
            Some("") => Err(version_error!(trimmed, "empty qualifier")),
            Some(qualifier) => Self::with_qualifier(major, minor, micro, qualifier)
                .map_err(|_| version_error!(trimmed, "invalid qualifier '{}'", qualifier)),
        }
    }

    /// Major version component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor version component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Micro version component.
    #[must_use]
    pub const fn micro(&self) -> u32 {
        self.micro
    }

    /// Qualifier, empty if the version has none.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Check if this is the empty version `0.0.0`.
    #[must_use]
    pub fn is_empty_version(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns a copy of this version with the qualifier removed.
    ///
    /// ```rust
    /// use bundlescope::bundle::Version;
    ///
    /// let version = Version::parse("3.1.0.v20240101")?;
    /// assert_eq!(version.without_qualifier(), Version::new(3, 1, 0));
    /// # Ok::<(), bundlescope::Error>(())
    /// ```
    #[must_use]
    pub fn without_qualifier(&self) -> Self {
        Self::new(self.major, self.minor, self.micro)
    }
}

fn is_qualifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn parse_component(version_str: &str, part: &str) -> Result<u32> {
    let digits = part.strip_prefix('+').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(version_error!(
            version_str,
            "invalid numeric component '{}'",
            part
        ));
    }

    match digits.parse::<u32>() {
        Ok(value) if value <= MAX_COMPONENT => Ok(value),
        _ => Err(version_error!(
            version_str,
            "numeric component '{}' out of range",
            part
        )),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
