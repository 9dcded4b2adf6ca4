//! Error types for INI parsing, merging, and I/O.
//!
//! Parse failures are fatal: the caller receives either a fully valid
//! [`Document`](crate::Document) or an error, never a half-populated one.
//!
//! ## Error Categories
//!
//! - **Parse errors**: malformed input such as an unmatched quote or a
//!   line that matches no construct. Each carries the 1-based line number
//!   and the raw text of the offending line.
//! - **Merge errors**: a merge source whose shape is not a two-level map of
//!   sections to string parameters.
//! - **I/O errors**: reported by the reader/writer adapters; the parser and
//!   formatter themselves never touch the filesystem.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{parse_str, Error};
//!
//! let result = parse_str("[server]\nhost = \"unterminated\n");
//! assert!(matches!(result, Err(Error::UnmatchedQuote { line: 2, .. })));
//!
//! if let Err(err) = parse_str("just some words\n") {
//!     eprintln!("parse error: {}", err);
//!     // "could not parse line 1: \"just some words\""
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
///
/// Parse variants carry the raw text of the failing line for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A quoted value was opened but never closed before end of input.
    #[error("unmatched quote at line {line}: {text:?}")]
    UnmatchedQuote { line: usize, text: String },

    /// A separator was found but the property name resolved to empty.
    #[error("property is missing a name at line {line}: {text:?}")]
    MissingPropertyName { line: usize, text: String },

    /// A non-blank line matched no construct (no header, no separator).
    #[error("could not parse line {line}: {text:?}")]
    InvalidLine { line: usize, text: String },

    /// A merge source whose shape is not sections of parameter maps.
    #[error("cannot merge {kind} into a document")]
    MergeIncompatible { kind: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unmatched-quote error for the line that opened the quote.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Error;
    ///
    /// let err = Error::unmatched_quote(4, "motd = \"hello");
    /// assert!(err.to_string().contains("line 4"));
    /// ```
    pub fn unmatched_quote(line: usize, text: &str) -> Self {
        Error::UnmatchedQuote {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a missing-property-name error (e.g. a line starting with the
    /// separator, or a name that trimmed to nothing).
    pub fn missing_property_name(line: usize, text: &str) -> Self {
        Error::MissingPropertyName {
            line,
            text: text.to_string(),
        }
    }

    /// Creates an invalid-line error for residual unscannable content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Error;
    ///
    /// let err = Error::invalid_line(7, "orphan text");
    /// assert!(err.to_string().contains("could not parse line 7"));
    /// ```
    pub fn invalid_line(line: usize, text: &str) -> Self {
        Error::InvalidLine {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a merge-rejection error naming the incompatible shape.
    pub fn merge_incompatible(kind: &str) -> Self {
        Error::MergeIncompatible {
            kind: kind.to_string(),
        }
    }

    /// Creates an I/O error for reader/writer adapter failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error from any display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// The 1-based line number of the offending input line, for parse
    /// errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnmatchedQuote { line, .. }
            | Error::MissingPropertyName { line, .. }
            | Error::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
