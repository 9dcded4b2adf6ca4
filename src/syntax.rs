//! INI Syntax Reference
//!
//! This module documents the INI dialect read and written by this library.
//!
//! # Overview
//!
//! An INI document is a line-oriented text format: named sections introduced
//! by `[section]` headers, each holding `name = value` properties. Every
//! value is a string; interpreting `"8080"` as a number is the caller's job.
//!
//! The concrete syntax is configurable through [`Options`](crate::Options):
//! the property separator, the set of comment characters, and the name of
//! the section that adopts properties appearing before any header.
//!
//! # Line Classification
//!
//! Each line is examined after leading whitespace is removed, in this order:
//!
//! 1. A line inside an open quoted value continues that value.
//! 2. A blank line is skipped.
//! 3. A line starting with a comment character is skipped.
//! 4. A line starting with `[` that also contains `]` is a section header.
//! 5. A line ending with a lone `\` continues onto the next line.
//! 6. Anything else is property text.
//!
//! Comment characters and `[` are only recognized at the start of a line.
//! In the middle of a value they are ordinary text:
//!
//! ```text
//! path = C:[data];v1    ; comment
//! ```
//!
//! Here `path` is the full string `C:[data];v1    ; comment` unless the
//! line starts with the comment character. To keep such characters across a
//! write/read cycle, quote the value.
//!
//! # Section Headers
//!
//! ```text
//! [database]
//! [ padded ]
//! [section] trailing text
//! ```
//!
//! **Rules**:
//! - The name is the text between `[` and the first `]`, trimmed, so
//!   `[ padded ]` names the section `padded`.
//! - Text after the closing `]` is ignored.
//! - An empty name (`[]` or `[   ]`) is an error.
//! - A `[` with no matching `]` is not a header; the line is read as
//!   property text instead.
//! - Naming a section twice merges the bodies; properties from the later
//!   occurrence extend the earlier one.
//!
//! # Properties
//!
//! ```text
//! name = value
//! spaced   =   still trimmed
//! empty =
//! ```
//!
//! **Rules**:
//! - The first unquoted separator splits name from value; later separators
//!   belong to the value (`url = a=b` gives `a=b`).
//! - Name and value are trimmed of surrounding whitespace.
//! - An empty value is legal and stored as `""`.
//! - An empty name (`= value`) is an error.
//! - A line with no separator at all is an error.
//! - Repeating a name within a section overwrites; the last value wins.
//!
//! ## Properties before any header
//!
//! A property that appears before the first section header is filed under
//! the default section (`global` unless configured otherwise):
//!
//! ```text
//! orphan = value
//!
//! [first]
//! key = value
//! ```
//!
//! # Quoting
//!
//! Double quotes protect whitespace and separator characters inside a value:
//!
//! ```text
//! motto = "  spaces kept  "
//! formula = "a = b"
//! ```
//!
//! One outer pair of quotes is removed when the value is stored; inner
//! quotes and escaped quotes (`\"`) are kept. A quoted region may span
//! multiple lines, and the line breaks inside it become part of the value:
//!
//! ```text
//! banner = "line one
//! line two"
//! ```
//!
//! A quote opened but never closed by the end of the document is an error.
//!
//! # Line Continuation
//!
//! A lone `\` at the end of a line joins it to the next line with a newline
//! character in between:
//!
//! ```text
//! hosts = alpha \
//! beta
//! ```
//!
//! reads as `alpha \nbeta` before trimming. A doubled `\\` at the end of a
//! line is an escaped backslash, not a continuation.
//!
//! # Escape Sequences
//!
//! With escaping enabled (the default), these sequences in values are
//! decoded on read and re-encoded on write:
//!
//! | Sequence | Character |
//! |----------|-----------|
//! | `\0` | null |
//! | `\n` | newline |
//! | `\r` | carriage return |
//! | `\t` | tab |
//!
//! Unrecognized sequences such as `\d` pass through unchanged. On write, a
//! backslash is doubled only when leaving it alone would fabricate one of
//! the sequences above: `C:\table` becomes `C:\\table` while `C:\path` is
//! left as is. With escaping disabled, values move in and out verbatim.
//!
//! # Comments
//!
//! ```text
//! ; full-line comment
//! # also a comment by default
//! ```
//!
//! Any character from the configured comment set (default `;` and `#`)
//! starts a comment when it is the first non-blank character of a line.
//! There are no trailing comments; see [Line Classification].
//!
//! Comments are not part of the document model and are dropped on a
//! read/write cycle.
//!
//! [Line Classification]: #line-classification
//!
//! # Output Format
//!
//! Writing produces one block per section, in insertion order:
//!
//! ```text
//! [server]
//! host = localhost
//! port = 8080
//!
//! ```
//!
//! Each block is the header, one `name = value` line per property with a
//! single space around the separator, and a trailing blank line. Values are
//! escaped but never re-quoted, so a value that was quoted on input is
//! written back bare.
//!
//! # Edge Cases
//!
//! - Windows line endings: a trailing `\r` is stripped from each line, so
//!   CRLF input parses the same as LF input.
//! - A quoted empty string `""` reads as the empty value.
//! - Values made only of whitespace read as empty unless quoted.
//!
//! # Limitations
//!
//! - Input and output are UTF-8. Other encodings must be transcoded by the
//!   caller.
//! - Comments are not preserved through a read/write cycle.
//! - Values containing consecutive backslashes do not survive a write/read
//!   cycle intact when escaping is enabled, because `\\` always decodes to
//!   a single backslash on read. Disable escaping to move such values
//!   verbatim.

// This module contains only documentation; no implementation code
