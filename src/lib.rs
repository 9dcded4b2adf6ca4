//! # inidoc
//!
//! An ordered, configurable INI document library: parse, query, edit,
//! merge, and write configuration files without losing their shape.
//!
//! ## What is INI?
//!
//! INI is the venerable line-oriented configuration format: `[section]`
//! headers grouping `name = value` properties, with comments and blank
//! lines in between. Every value is a string; this library keeps it that
//! way and leaves interpretation to the caller.
//!
//! ## Key Features
//!
//! - **Ordered**: sections and parameters keep insertion order, so a file
//!   read and written back stays diff-friendly
//! - **Configurable Syntax**: separator character, comment characters,
//!   default section name, and escaping are all [`Options`]
//! - **Quoted and Multiline Values**: double quotes protect whitespace and
//!   separators, values continue across lines, and `\n`-style escapes are
//!   decoded and re-encoded
//! - **Merge Anything Map-Shaped**: any [`serde::Serialize`] value shaped
//!   like sections-of-parameters layers onto a document, from another
//!   [`Document`] to a `HashMap` to a derived struct
//! - **Serde Compatible**: documents and sections serialize and
//!   deserialize through serde for interop with other formats
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inidoc = "0.1"
//! ```
//!
//! ### Parsing and Querying
//!
//! ```rust
//! use inidoc::Document;
//!
//! let text = r#"
//! ; web tier
//! [server]
//! host = localhost
//! port = 8080
//!
//! [auth]
//! enabled = true
//! "#;
//!
//! let doc = Document::parse(text).unwrap();
//! assert_eq!(doc.get("server", "host"), Some("localhost"));
//! assert_eq!(doc.get("auth", "enabled"), Some("true"));
//! assert_eq!(doc.section_names().collect::<Vec<_>>(), ["server", "auth"]);
//! ```
//!
//! ### Editing and Writing
//!
//! ```rust
//! use inidoc::Document;
//!
//! let mut doc = Document::new();
//! doc.set("database", "url", "postgres://localhost/app");
//! doc.set("database", "pool", "16");
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "[database]\nurl = postgres://localhost/app\npool = 16\n\n"
//! );
//! ```
//!
//! ### Layering Configuration with Merge
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! let mut doc = inidoc::parse_str("[server]\nhost = localhost\nport = 8080\n").unwrap();
//!
//! let overrides = HashMap::from([("server", HashMap::from([("host", "0.0.0.0")]))]);
//! doc.merge(&overrides).unwrap();
//!
//! assert_eq!(doc.get("server", "host"), Some("0.0.0.0"));
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! ```
//!
//! ### Files
//!
//! [`Document::load`] returns `Ok(None)` for a missing or unreadable file,
//! so "no config present" reads as an ordinary case rather than an error:
//!
//! ```rust,no_run
//! use inidoc::Document;
//!
//! let doc = Document::load("app.ini").unwrap().unwrap_or_default();
//! doc.save("app.ini").unwrap();
//! ```
//!
//! ## Dialect
//!
//! The exact rules for headers, quoting, continuation, escapes, and
//! comments are documented in the [`syntax`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Parse a document, read values, write it back
//! - **`custom_options.rs`** - Colon separators and other dialect tweaks
//! - **`merge.rs`** - Layering defaults, file values, and overrides
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod escape;
pub mod macros;
mod merge;
pub mod options;
mod parser;
pub mod section;
pub mod syntax;
mod writer;

pub use document::{Document, FrozenDocument};
pub use error::{Error, Result};
pub use options::Options;
pub use section::Section;

use std::io;

/// Parse a document from a string of INI text using default [`Options`].
///
/// # Examples
///
/// ```rust
/// let doc = inidoc::parse_str("[server]\nhost = localhost\n").unwrap();
/// assert_eq!(doc.get("server", "host"), Some("localhost"));
/// ```
///
/// # Errors
///
/// Returns an error if the input contains an unparseable line, a property
/// with no name, or an unclosed quote. Parse errors carry the 1-based line
/// number and the offending text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(text: &str) -> Result<Document> {
    Document::parse(text)
}

/// Parse a document from a string of INI text with custom [`Options`].
///
/// # Examples
///
/// ```rust
/// use inidoc::Options;
///
/// let options = Options::new().with_separator(':');
/// let doc = inidoc::parse_str_with_options("[server]\nhost: localhost\n", options).unwrap();
/// assert_eq!(doc.get("server", "host"), Some("localhost"));
/// ```
///
/// # Errors
///
/// Returns an error if the input cannot be parsed under the given options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(text: &str, options: Options) -> Result<Document> {
    Document::parse_with_options(text, options)
}

/// Parse a document from an I/O stream of INI text.
///
/// The whole stream is read before parsing; input must be UTF-8.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[server]\nhost = localhost\n");
/// let doc = inidoc::from_reader(cursor).unwrap();
/// assert_eq!(doc.get("server", "host"), Some("localhost"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text cannot be parsed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    from_reader_with_options(reader, Options::default())
}

/// Parse a document from an I/O stream with custom [`Options`].
///
/// # Errors
///
/// Returns an error if reading fails or the text cannot be parsed under
/// the given options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(mut reader: R, options: Options) -> Result<Document>
where
    R: io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_str_with_options(&text, options)
}

/// Render a document to its INI text form.
///
/// Equivalent to `doc.to_string()`; provided for symmetry with
/// [`parse_str`].
///
/// # Examples
///
/// ```rust
/// let doc = inidoc::parse_str("[a]\nk = v\n").unwrap();
/// assert_eq!(inidoc::to_string(&doc), "[a]\nk = v\n\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    doc.to_string()
}

/// Render a document as INI text into a writer.
///
/// # Examples
///
/// ```rust
/// let doc = inidoc::parse_str("[a]\nk = v\n").unwrap();
/// let mut buffer = Vec::new();
/// inidoc::to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[a]\nk = v\n\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(doc.to_string().as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
