use super::name::AttributeName;
use crate::Result;

/// An ordered set of manifest headers.
///
/// Headers keep their insertion order so that a manifest is written back in the order it was
/// read. Lookups take plain `&str` names and match them case-insensitively. Manifest sections
/// hold few headers, so lookups scan linearly.
///
/// Equality ignores order: two attribute sets are equal when they hold the same names mapped to
/// the same values.
///
/// # Examples
///
/// ```rust
/// use bundlescope::manifest::Attributes;
///
/// let mut attributes = Attributes::new();
/// attributes.insert("Bundle-SymbolicName", "com.example.foo")?;
/// assert_eq!(attributes.get("bundle-symbolicname"), Some("com.example.foo"));
/// assert!(attributes.contains("Bundle-SymbolicName"));
/// assert!(!attributes.contains("Bundle-Version"));
/// # Ok::<(), bundlescope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    headers: Vec<(AttributeName, String)>,
}

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if no header is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Value of the header `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.headers[idx].1.as_str())
    }

    /// Returns `true` if a header named `name` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Set a header, replacing an existing value in place.
    ///
    /// Returns the previous value if the header was already present.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `name` is not a valid header name or `value`
    /// contains a line break or NUL character, neither of which can be represented in a
    /// manifest.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let name = AttributeName::new(name)?;
        let value = value.into();

        if value.contains(['\r', '\n', '\0']) {
            return Err(malformed_error!(
                "Value of header '{}' contains a line break or NUL",
                name
            ));
        }

        Ok(self.insert_name(name, value))
    }

    /// Remove a header, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.headers.remove(idx).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name, value.as_str()))
    }

    /// Iterate over the header names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &AttributeName> {
        self.headers.iter().map(|(name, _)| name)
    }

    /// Insert an already validated header. The reader uses this after decoding a header line.
    pub(crate) fn insert_name(&mut self, name: AttributeName, value: String) -> Option<String> {
        match self.headers.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.headers.push((name, value));
                None
            }
        }
    }

    /// Copy every header of `other` into `self`, overwriting duplicates.
    pub(crate) fn merge(&mut self, other: Attributes) {
        for (name, value) in other.headers {
            self.insert_name(name, value);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|(existing, _)| existing.matches(name))
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .headers
                .iter()
                .all(|(name, value)| other.get(name.as_str()) == Some(value.as_str()))
    }
}

impl Eq for Attributes {}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a AttributeName, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a AttributeName, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut attributes = Attributes::new();
        assert!(attributes.is_empty());

        assert_eq!(attributes.insert("Bundle-Version", "1.0.0").unwrap(), None);
        assert_eq!(
            attributes.insert("bundle-version", "2.0.0").unwrap(),
            Some("1.0.0".to_string())
        );
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("BUNDLE-VERSION"), Some("2.0.0"));

        // Replacing keeps the original spelling of the first insert.
        let (name, _) = attributes.iter().next().unwrap();
        assert_eq!(name.as_str(), "Bundle-Version");

        assert_eq!(attributes.remove("Bundle-version"), Some("2.0.0".to_string()));
        assert!(attributes.is_empty());
        assert_eq!(attributes.remove("Bundle-Version"), None);
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let mut attributes = Attributes::new();
        assert!(attributes.insert("Not Valid", "x").is_err());
        assert!(attributes.insert("Valid", "line\nbreak").is_err());
        assert!(attributes.insert("Valid", "carriage\rreturn").is_err());
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut attributes = Attributes::new();
        attributes.insert("C", "3").unwrap();
        attributes.insert("A", "1").unwrap();
        attributes.insert("B", "2").unwrap();

        let names: Vec<&str> = attributes.names().map(AttributeName::as_str).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut first = Attributes::new();
        first.insert("A", "1").unwrap();
        first.insert("B", "2").unwrap();

        let mut second = Attributes::new();
        second.insert("b", "2").unwrap();
        second.insert("a", "1").unwrap();

        assert_eq!(first, second);

        second.insert("B", "3").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Attributes::new();
        base.insert("A", "1").unwrap();
        base.insert("B", "2").unwrap();

        let mut overlay = Attributes::new();
        overlay.insert("B", "20").unwrap();
        overlay.insert("C", "30").unwrap();

        base.merge(overlay);
        assert_eq!(base.len(), 3);
        assert_eq!(base.get("B"), Some("20"));
        assert_eq!(base.get("C"), Some("30"));
    }

    #[test]
    fn test_into_iterator() {
        let mut attributes = Attributes::new();
        attributes.insert("A", "1").unwrap();

        let mut seen = 0;
        for (name, value) in &attributes {
            assert_eq!(name.as_str(), "A");
            assert_eq!(value, "1");
            seen += 1;
        }
        assert_eq!(seen, 1);
    }
}
