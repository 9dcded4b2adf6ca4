//! The INI formatter.
//!
//! A pure transform from a [`Document`] to text: each section in insertion
//! order becomes a `[name]` header followed by `name <sep> value` lines and
//! one blank line. Values pass through the document's escape transform, so
//! control characters come out as two-character sequences rather than
//! re-quoted strings, and the output parses back to an equal document.

use crate::document::Document;

/// Formats a document as INI text. This backs `Document`'s
/// [`Display`](std::fmt::Display) implementation.
pub(crate) fn write_document(doc: &Document) -> String {
    let options = doc.options();
    let mut out = String::with_capacity(256);
    for (name, section) in doc.sections() {
        out.push('[');
        out.push_str(name);
        out.push(']');
        out.push('\n');
        for (key, value) in section.iter() {
            out.push_str(key);
            out.push(' ');
            out.push(options.separator);
            out.push(' ');
            out.push_str(&options.escape_value(value));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
