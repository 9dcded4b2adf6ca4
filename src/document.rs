//! The in-memory INI document model.
//!
//! A [`Document`] is an ordered mapping from section names to [`Section`]s,
//! plus the [`Options`] it was built with. It is created empty or by
//! parsing, mutated through the accessors below, and turned back into INI
//! text by its [`Display`](fmt::Display) implementation.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::Document;
//!
//! let mut doc = Document::parse("[server]\nhost = localhost\n").unwrap();
//! doc.section_mut("server")
//!     .insert("port".to_string(), "8080".to_string());
//!
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! assert_eq!(doc.to_string(), "[server]\nhost = localhost\nport = 8080\n\n");
//! ```

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::Path;

use crate::error::{Error, Result};
use crate::merge::collect_sections;
use crate::options::Options;
use crate::section::Section;
use crate::{parser, writer};

/// The complete in-memory representation of an INI file.
///
/// Sections keep insertion order; their names are unique. The options a
/// document carries are fixed at construction and govern both how it was
/// parsed and how it formats itself.
///
/// # Examples
///
/// ```rust
/// use inidoc::Document;
///
/// let doc = Document::parse("[a]\nx = 1\n[b]\ny = 2\n").unwrap();
/// let names: Vec<_> = doc.section_names().collect();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    options: Options,
}

impl Document {
    /// Creates an empty document with default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::new();
    /// assert!(doc.is_empty());
    /// assert_eq!(doc.to_string(), "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document carrying the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{Document, Options};
    ///
    /// let doc = Document::with_options(Options::new().with_separator(':'));
    /// assert_eq!(doc.options().separator, ':');
    /// ```
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Document {
            sections: IndexMap::new(),
            options,
        }
    }

    /// Parses INI text into a document using default options.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed input: an unmatched quote, a
    /// property with no name, or a line that matches no construct. The
    /// error carries the offending line number and raw text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::parse("[db]\nurl = postgres://localhost\n").unwrap();
    /// assert_eq!(doc.get("db", "url"), Some("postgres://localhost"));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text, Options::default())
    }

    /// Parses INI text into a document using the given options.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Document::parse`].
    pub fn parse_with_options(text: &str, options: Options) -> Result<Self> {
        parser::parse(text, options)
    }

    /// Reads and parses an INI file with default options.
    ///
    /// An unreadable file (missing, permission denied, not valid UTF-8) is
    /// an absent result, `Ok(None)`. Only content that was actually read
    /// can fail with a parse error.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the file was read but is malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// assert!(Document::load("/no/such/file.ini").unwrap().is_none());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        Self::load_with_options(path, Options::default())
    }

    /// Reads and parses an INI file with the given options.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Document::load`].
    pub fn load_with_options<P: AsRef<Path>>(path: P, options: Options) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Ok(None),
        };
        parser::parse(&text, options).map(Some)
    }

    /// Writes the formatted document to a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|err| Error::io(&err.to_string()))
    }

    /// The options this document was built with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the section with the given name, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::parse("[a]\nx = 1\n").unwrap();
    /// assert!(doc.section("a").is_some());
    /// assert!(doc.section("b").is_none());
    /// ```
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns the section with the given name, creating an empty one if it
    /// does not exist yet.
    ///
    /// New sections are appended after the existing ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.section_mut("server")
    ///     .insert("host".to_string(), "localhost".to_string());
    /// assert!(doc.has_section("server"));
    /// ```
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections
            .entry(name.to_string())
            .or_insert_with(Section::new)
    }

    /// Replaces a section wholesale, returning the previous content if the
    /// name was already present. A replaced section keeps its position; a
    /// new one is appended.
    pub fn set_section(&mut self, name: &str, section: Section) -> Option<Section> {
        self.sections.insert(name.to_string(), section)
    }

    /// Removes a section, returning its content if it was present.
    ///
    /// The order of the remaining sections is preserved; removing an absent
    /// name is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let mut doc = Document::parse("[a]\nx = 1\n").unwrap();
    /// let removed = doc.remove_section("a").unwrap();
    /// assert_eq!(removed.get("x"), Some("1"));
    /// assert!(doc.remove_section("a").is_none());
    /// ```
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    /// Returns `true` if a section with the given name exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the value of one parameter, if both the section and the
    /// parameter exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::parse("[a]\nx = 1\n").unwrap();
    /// assert_eq!(doc.get("a", "x"), Some("1"));
    /// assert_eq!(doc.get("a", "y"), None);
    /// assert_eq!(doc.get("b", "x"), None);
    /// ```
    #[must_use]
    pub fn get(&self, section: &str, name: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(name))
    }

    /// Sets one parameter, creating the section if needed. Returns the
    /// previous value if the parameter was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set("server", "port", "8080");
    /// assert_eq!(doc.get("server", "port"), Some("8080"));
    /// ```
    pub fn set(&mut self, section: &str, name: &str, value: &str) -> Option<String> {
        self.section_mut(section)
            .insert(name.to_string(), value.to_string())
    }

    /// Returns an iterator over section names, in insertion order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns an iterator over `(name, section)` pairs, in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Returns an iterator over every `(section, parameter, value)` triple,
    /// in document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::parse("[a]\nx = 1\ny = 2\n").unwrap();
    /// let triples: Vec<_> = doc.properties().collect();
    /// assert_eq!(triples, vec![("a", "x", "1"), ("a", "y", "2")]);
    /// ```
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|(name, section)| {
            section
                .iter()
                .map(move |(k, v)| (name.as_str(), k.as_str(), v.as_str()))
        })
    }

    /// Returns a snapshot of the sections whose names satisfy the
    /// predicate. The result is cloned content, not a live view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let doc = Document::parse("[db.primary]\nx = 1\n[db.replica]\nx = 2\n[cache]\nx = 3\n")
    ///     .unwrap();
    /// let dbs = doc.filter_sections(|name| name.starts_with("db."));
    /// assert_eq!(dbs.len(), 2);
    /// ```
    #[must_use]
    pub fn filter_sections<F>(&self, mut predicate: F) -> Vec<(String, Section)>
    where
        F: FnMut(&str) -> bool,
    {
        self.sections
            .iter()
            .filter(|(name, _)| predicate(name))
            .map(|(name, section)| (name.clone(), section.clone()))
            .collect()
    }

    /// Returns the number of sections.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Merges a section-shaped value into this document.
    ///
    /// The source may be anything serializable as a two-level map: another
    /// `Document`, nested `IndexMap`/`HashMap`/`BTreeMap`s, a
    /// `#[derive(Serialize)]` struct of structs, or a `serde_json::Value`
    /// object. Scalar leaf values (numbers, booleans) are stringified.
    ///
    /// Sections and parameters from the source are unioned in: existing
    /// parameters keep their position and take the source's value on
    /// collision; new parameters and sections are appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeIncompatible`] if the source does not have the
    /// section/parameter/value shape (e.g. a sequence, a scalar at the top
    /// level, or a nested map three levels deep).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let mut base = Document::parse("[s]\nk = 1\n").unwrap();
    /// let other = Document::parse("[s]\nk = 2\nj = 3\n").unwrap();
    /// base.merge(&other).unwrap();
    /// assert_eq!(base.get("s", "k"), Some("2"));
    /// assert_eq!(base.get("s", "j"), Some("3"));
    ///
    /// assert!(base.merge(&vec![1, 2, 3]).is_err());
    /// ```
    pub fn merge<S>(&mut self, source: &S) -> Result<()>
    where
        S: Serialize + ?Sized,
    {
        let sections = collect_sections(source)?;
        for (name, pairs) in sections {
            let section = self.section_mut(&name);
            for (key, value) in pairs {
                section.insert(key, value);
            }
        }
        Ok(())
    }

    /// Non-destructive [`Document::merge`]: returns a new document, leaving
    /// this one untouched. The result keeps this document's options.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Document::merge`].
    pub fn merged<S>(&self, source: &S) -> Result<Self>
    where
        S: Serialize + ?Sized,
    {
        let mut doc = self.clone();
        doc.merge(source)?;
        Ok(doc)
    }

    /// Converts this document into a read-only [`FrozenDocument`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Document;
    ///
    /// let frozen = Document::parse("[a]\nx = 1\n").unwrap().freeze();
    /// assert_eq!(frozen.get("a", "x"), Some("1"));
    /// let mut doc = frozen.thaw();
    /// doc.set("a", "x", "2");
    /// ```
    #[must_use]
    pub fn freeze(self) -> FrozenDocument {
        FrozenDocument(self)
    }
}

/// Content equality: same section names with the same parameter/value
/// pairs. Insertion order and formatting options do not participate.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Document {}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::write_document(self))
    }
}

impl IntoIterator for Document {
    type Item = (String, Section);
    type IntoIter = indexmap::map::IntoIter<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to parameter maps")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut doc = Document::new();
                while let Some((name, section)) = access.next_entry::<String, Section>()? {
                    doc.set_section(&name, section);
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// A read-only document.
///
/// Produced by [`Document::freeze`]; converted back with
/// [`FrozenDocument::thaw`]. The whole read surface of [`Document`] is
/// available through deref, and because no `&mut self` methods exist on
/// this type, mutation is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use inidoc::Document;
///
/// let frozen = Document::parse("[a]\nx = 1\n").unwrap().freeze();
/// assert_eq!(frozen.section_names().count(), 1);
/// assert_eq!(frozen.to_string(), "[a]\nx = 1\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenDocument(Document);

impl FrozenDocument {
    /// Converts back into a mutable [`Document`].
    #[must_use]
    pub fn thaw(self) -> Document {
        self.0
    }
}

impl Deref for FrozenDocument {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Document> for FrozenDocument {
    fn from(doc: Document) -> Self {
        doc.freeze()
    }
}

impl PartialEq<Document> for FrozenDocument {
    fn eq(&self, other: &Document) -> bool {
        self.0 == *other
    }
}

impl PartialEq<FrozenDocument> for Document {
    fn eq(&self, other: &FrozenDocument) -> bool {
        *self == other.0
    }
}

impl fmt::Display for FrozenDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for FrozenDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
