use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::Result;

/// Maximum length of a header name in bytes.
pub const MAX_NAME_LENGTH: usize = 70;

/// A validated manifest header name.
///
/// Header names consist of 1 to 70 ASCII letters, digits, `-` and `_`. Comparison and hashing
/// ignore ASCII case, as required by the manifest format, while the original spelling is kept
/// for display and writing.
///
/// # Examples
///
/// ```rust
/// use bundlescope::manifest::AttributeName;
///
/// let name = AttributeName::new("Bundle-SymbolicName")?;
/// assert_eq!(name, AttributeName::new("bundle-symbolicname")?);
/// assert_eq!(name.as_str(), "Bundle-SymbolicName");
/// assert!(AttributeName::new("Bad Name").is_err());
/// # Ok::<(), bundlescope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AttributeName(String);

impl AttributeName {
    /// Validate and wrap a header name.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the name is empty, longer than
    /// [`MAX_NAME_LENGTH`] bytes, or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(malformed_error!("Header name cannot be empty"));
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(malformed_error!(
                "Header name '{}' exceeds {} bytes",
                name,
                MAX_NAME_LENGTH
            ));
        }

        if let Some(invalid) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(malformed_error!(
                "Invalid character {:?} in header name '{}'",
                invalid,
                name
            ));
        }

        Ok(Self(name))
    }

    /// The name as originally spelled.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a plain string.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for AttributeName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for AttributeName {}

impl Hash for AttributeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_usize(self.0.len());
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
