//! Ordered parameter map for one INI section.
//!
//! This module provides [`Section`], a wrapper around [`IndexMap`] holding
//! the parameter/value pairs of a single `[name]` block. Insertion order is
//! the order the formatter writes parameters back out, so a parsed file
//! keeps its shape across a round trip.
//!
//! ## Why IndexMap?
//!
//! Sections use `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: parameters serialize in the order they were
//!   inserted (or parsed)
//! - **Stable overwrite**: assigning an existing key replaces its value but
//!   keeps its original position
//! - **Order-preserving removal**: deleting a parameter never reorders the
//!   rest
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::Section;
//!
//! let mut section = Section::new();
//! section.insert("host".to_string(), "localhost".to_string());
//! section.insert("port".to_string(), "8080".to_string());
//!
//! assert_eq!(section.len(), 2);
//! assert_eq!(section.get("host"), Some("localhost"));
//! ```

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An ordered map of parameter names to string values within one section.
///
/// Keys are unique; assigning an existing key overwrites the value while
/// keeping the key's original position.
///
/// # Examples
///
/// ```rust
/// use inidoc::Section;
///
/// let mut section = Section::new();
/// section.insert("first".to_string(), "1".to_string());
/// section.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = section.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section(IndexMap<String, String>);

impl Section {
    /// Creates an empty `Section`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Section;
    ///
    /// let section = Section::new();
    /// assert!(section.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Section(IndexMap::new())
    }

    /// Creates an empty `Section` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Section(IndexMap::with_capacity(capacity))
    }

    /// Inserts a parameter into the section.
    ///
    /// If the section already contained this parameter, the old value is
    /// returned and the parameter keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Section;
    ///
    /// let mut section = Section::new();
    /// assert!(section.insert("key".to_string(), "1".to_string()).is_none());
    /// assert_eq!(
    ///     section.insert("key".to_string(), "2".to_string()).as_deref(),
    ///     Some("1")
    /// );
    /// ```
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        self.0.insert(name, value)
    }

    /// Returns the value of a parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Section;
    ///
    /// let mut section = Section::new();
    /// section.insert("key".to_string(), "42".to_string());
    /// assert_eq!(section.get("key"), Some("42"));
    /// assert_eq!(section.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes a parameter, returning its value if it was present.
    ///
    /// The order of the remaining parameters is preserved.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Returns `true` if the section contains the parameter.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of parameters in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over parameter names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over parameter/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndexMap<String, String>> for Section {
    fn from(map: IndexMap<String, String>) -> Self {
        Section(map)
    }
}

impl From<HashMap<String, String>> for Section {
    fn from(map: HashMap<String, String>) -> Self {
        Section(map.into_iter().collect())
    }
}

impl From<Section> for IndexMap<String, String> {
    fn from(section: Section) -> Self {
        section.0
    }
}

impl IntoIterator for Section {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Section {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Section(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for Section {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of parameter names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut section =
                    Section::with_capacity(access.size_hint().unwrap_or_default());
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    section.insert(name, value);
                }
                Ok(section)
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}
