//! Configuration options for INI parsing and formatting.
//!
//! A single [`Options`] value is applied uniformly to both directions: the
//! parser uses it to recognize comments, the separator, and escapes, and the
//! formatter uses the same value so output re-parses to the same document.
//! Every [`Document`](crate::Document) carries the options it was built
//! with; they are fixed at construction time.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{parse_str_with_options, Options};
//!
//! // Colon-separated values, shell-style comments only.
//! let options = Options::new()
//!     .with_separator(':')
//!     .with_comment("#");
//!
//! let doc = parse_str_with_options("[db]\nhost: localhost\n", options).unwrap();
//! assert_eq!(doc.get("db", "host"), Some("localhost"));
//! ```

use crate::escape;

/// Configuration options for INI parsing and formatting.
///
/// Controls comment recognition, the name/value separator, escape handling,
/// and where parameters that precede any `[section]` header are placed.
///
/// # Examples
///
/// ```rust
/// use inidoc::Options;
///
/// // Defaults: `;` and `#` comments, `=` separator, escapes enabled,
/// // loose parameters collected under "global".
/// let options = Options::new();
///
/// // Custom configuration
/// let options = Options::new()
///     .with_separator(':')
///     .with_comment(";")
///     .with_escape(false)
///     .with_default_section("main");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Characters that start a line comment when first on a line.
    pub comment: String,
    /// Single character dividing a parameter name from its value.
    pub separator: char,
    /// Whether values pass through the escape/unescape transforms.
    pub escape: bool,
    /// Section that receives parameters appearing before any header.
    pub default_section: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            comment: ";#".to_string(),
            separator: '=',
            escape: true,
            default_section: "global".to_string(),
        }
    }
}

impl Options {
    /// Creates default options (`;#` comments, `=` separator, escapes on,
    /// default section `global`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.separator, '=');
    /// assert!(options.escape);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the characters that start a line comment.
    ///
    /// A line is a comment when its first non-whitespace character is any
    /// character of this set. Mid-line occurrences are ordinary value text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Options;
    ///
    /// let options = Options::new().with_comment("#");
    /// ```
    #[must_use]
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    /// Sets the name/value separator character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Options;
    ///
    /// let options = Options::new().with_separator(':');
    /// assert_eq!(options.separator, ':');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Enables or disables the escape/unescape transforms.
    ///
    /// When disabled, [`Options::escape_value`] and
    /// [`Options::unescape_value`] are identity functions and control
    /// characters pass through the formatter literally.
    #[must_use]
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Sets the section name used for parameters that precede any
    /// `[section]` header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{parse_str_with_options, Options};
    ///
    /// let options = Options::new().with_default_section("main");
    /// let doc = parse_str_with_options("port = 80\n", options).unwrap();
    /// assert_eq!(doc.get("main", "port"), Some("80"));
    /// ```
    #[must_use]
    pub fn with_default_section(mut self, name: &str) -> Self {
        self.default_section = name.to_string();
        self
    }

    /// Applies the escape transform to a value, honoring the escape flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.escape_value("a\nb"), "a\\nb");
    ///
    /// let raw = Options::new().with_escape(false);
    /// assert_eq!(raw.escape_value("a\nb"), "a\nb");
    /// ```
    #[must_use]
    pub fn escape_value(&self, value: &str) -> String {
        if self.escape {
            escape::escape(value)
        } else {
            value.to_string()
        }
    }

    /// Applies the unescape transform to a value, honoring the escape flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.unescape_value("a\\tb"), "a\tb");
    /// ```
    #[must_use]
    pub fn unescape_value(&self, value: &str) -> String {
        if self.escape {
            escape::unescape(value)
        } else {
            value.to_string()
        }
    }

    /// Whether `c` starts a line comment.
    #[inline]
    pub(crate) fn is_comment_char(&self, c: char) -> bool {
        self.comment.contains(c)
    }

    /// The characters a backslash may escape during scanning: brackets,
    /// the separator, the comment set, and the double quote.
    #[inline]
    pub(crate) fn is_special(&self, c: char) -> bool {
        c == '[' || c == ']' || c == '"' || c == self.separator || self.is_comment_char(c)
    }
}
