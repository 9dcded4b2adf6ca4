//! Escape and unescape transforms for parameter values.
//!
//! Values may contain control characters that would break the line-oriented
//! file format. [`escape`] replaces NUL, LF, CR, and TAB with two-character
//! backslash sequences on the way out; [`unescape`] reverses the mapping on
//! the way in. Unknown backslash sequences are not errors; they pass
//! through unchanged, so Windows paths like `C:\path` survive a round trip
//! without doubling every backslash.
//!
//! These are the raw transforms. The escape-flag gating lives on
//! [`Options`](crate::Options): [`Options::escape_value`](crate::Options::escape_value)
//! and [`Options::unescape_value`](crate::Options::unescape_value) are
//! identity functions when the flag is off.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::escape::{escape, unescape};
//!
//! assert_eq!(escape("two\nlines"), "two\\nlines");
//! assert_eq!(unescape("two\\nlines"), "two\nlines");
//! assert_eq!(unescape("C:\\path"), "C:\\path"); // \p is not a sequence
//! ```

/// Replaces literal NUL, LF, CR, and TAB with their two-character escape
/// forms.
///
/// A backslash immediately preceding `0`, `n`, `r`, or `t` is doubled so
/// the next parse does not mistake it for an escape sequence. The same
/// applies before a literal NUL, LF, CR, or TAB, whose escaped form would
/// otherwise recreate that ambiguous pair. All other backslashes are left
/// alone.
///
/// # Examples
///
/// ```rust
/// use inidoc::escape::escape;
///
/// assert_eq!(escape("a\tb"), "a\\tb");
/// assert_eq!(escape("C:\\table"), "C:\\\\table"); // `\t` would read as TAB
/// assert_eq!(escape("C:\\path"), "C:\\path");     // `\p` is harmless
/// ```
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some('0' | 'n' | 'r' | 't' | '\0' | '\n' | '\r' | '\t') => out.push_str("\\\\"),
                _ => out.push('\\'),
            },
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replaces the two-character sequences `\0`, `\n`, `\r`, `\t`, and `\\`
/// with NUL, LF, CR, TAB, and a single backslash.
///
/// Any other backslash sequence is passed through unchanged, including a
/// trailing backslash with nothing after it.
///
/// # Examples
///
/// ```rust
/// use inidoc::escape::unescape;
///
/// assert_eq!(unescape("a\\r\\nb"), "a\r\nb");
/// assert_eq!(unescape("\\q"), "\\q");
/// assert_eq!(unescape("ends with \\"), "ends with \\");
/// ```
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('\0'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_table() {
        assert_eq!(escape("\0"), "\\0");
        assert_eq!(escape("\n"), "\\n");
        assert_eq!(escape("\r"), "\\r");
        assert_eq!(escape("\t"), "\\t");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn unescape_table() {
        assert_eq!(unescape("\\0"), "\0");
        assert_eq!(unescape("\\n"), "\n");
        assert_eq!(unescape("\\r"), "\r");
        assert_eq!(unescape("\\t"), "\t");
        assert_eq!(unescape("\\\\"), "\\");
    }

    #[test]
    fn unknown_sequences_pass_through() {
        assert_eq!(unescape("\\q"), "\\q");
        assert_eq!(unescape("\\ "), "\\ ");
        assert_eq!(unescape("tail\\"), "tail\\");
    }

    #[test]
    fn conditional_doubling() {
        // A backslash only doubles when the next character would turn it
        // into an escape sequence on re-parse.
        assert_eq!(escape("C:\\table"), "C:\\\\table");
        assert_eq!(escape("C:\\path"), "C:\\path");
        assert_eq!(unescape(&escape("C:\\table")), "C:\\table");
        assert_eq!(unescape(&escape("C:\\path")), "C:\\path");

        // A literal control after the backslash escapes to one of the
        // trigger letters, so it doubles as well.
        assert_eq!(escape("\\\t"), "\\\\\\t");
        assert_eq!(unescape(&escape("\\\t")), "\\\t");
    }

    #[test]
    fn symmetry_over_singles() {
        for s in [
            "",
            "plain",
            "line\nbreak",
            "tab\there",
            "cr\rhere",
            "nul\0here",
            "back\\slash",
            "trailing\\",
            "\\n literal pair",
            "mixed \\q \t \n",
        ] {
            assert_eq!(unescape(&escape(s)), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn consecutive_backslash_limit() {
        // Two backslashes collapse to one on unescape; the escape transform
        // does not double a backslash that precedes another backslash, so
        // this class of input does not round-trip. Pinned here so the limit
        // stays visible.
        assert_eq!(escape("\\\\"), "\\\\");
        assert_eq!(unescape("\\\\"), "\\");
        assert_eq!(unescape(&escape("a\\\\n")), "a\\\n");
    }
}
