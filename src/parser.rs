//! The INI scanner.
//!
//! Text is fed line by line (quote state and continuations carry across
//! physical lines) and each scan position is resolved in precedence order:
//!
//! 1. An escaped special character (`\` before `[`, `]`, the separator, a
//!    comment character, or `"`) is appended literally.
//! 2. An unescaped `"` opens a quoted run; everything up to the closing
//!    quote is literal content, including separators, comment characters,
//!    and line breaks. An unclosed run is a fatal error.
//! 3. A comment line (first non-whitespace character in the comment set) or
//!    a blank line finalizes any pending property and is discarded.
//! 4. The first unescaped separator on a logical line splits the buffer
//!    into property name and value; later separators are value text.
//! 5. A `[name]` line switches the current section, creating or re-using
//!    it. Text after the closing bracket is ignored.
//! 6. Anything else is copied verbatim.
//!
//! A line ending in a solo `\` continues onto the next physical line with a
//! newline joining the halves. Parsing is lenient: properties that appear
//! before any header land in the configured default section.

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::section::Section;

/// Parses INI text into a [`Document`] carrying `options`.
pub(crate) fn parse(text: &str, options: Options) -> Result<Document> {
    let mut parser = Parser::new(options);
    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        parser.line(idx + 1, line)?;
    }
    parser.finish()
}

/// Line-fed scanner state.
///
/// `name`/`buffer` accumulate the property under construction; they can
/// span physical lines through continuations and quoted runs. `start_*`
/// remember where the accumulation began so errors point at the right line.
struct Parser {
    options: Options,
    sections: IndexMap<String, Section>,
    current_section: Option<String>,
    name: Option<String>,
    buffer: String,
    pending: bool,
    in_quote: bool,
    start_line: usize,
    start_text: String,
    quote_line: usize,
    quote_text: String,
}

impl Parser {
    fn new(options: Options) -> Self {
        Parser {
            options,
            sections: IndexMap::new(),
            current_section: None,
            name: None,
            buffer: String::new(),
            pending: false,
            in_quote: false,
            start_line: 0,
            start_text: String::new(),
            quote_line: 0,
            quote_text: String::new(),
        }
    }

    /// Processes one physical line (already stripped of its line ending).
    fn line(&mut self, lineno: usize, line: &str) -> Result<()> {
        if self.in_quote {
            // An open quoted run swallows the line break and keeps going.
            self.buffer.push('\n');
            return self.scan(lineno, line);
        }

        let trimmed = line.trim_start();

        // Comment or blank line: finalize whatever is pending, drop the line.
        if trimmed.is_empty() || trimmed.starts_with(|c| self.options.is_comment_char(c)) {
            return self.flush();
        }

        // Section header. An escaped bracket (`\[`) never reaches this arm
        // because the line then starts with a backslash.
        if trimmed.starts_with('[') {
            if let Some(end) = trimmed.find(']') {
                self.flush()?;
                let name = trimmed[1..end].trim();
                if name.is_empty() {
                    return Err(Error::invalid_line(lineno, line));
                }
                self.sections.entry(name.to_string()).or_default();
                self.current_section = Some(name.to_string());
                return Ok(());
            }
            // No closing bracket: not a header. The line falls through to
            // property scanning and fails there like any other line without
            // a separator.
        }

        self.scan(lineno, line)
    }

    /// Scans property content. Called for fresh property lines, for
    /// continuation lines, and for the remainder of multi-line quoted runs.
    fn scan(&mut self, lineno: usize, line: &str) -> Result<()> {
        if !self.pending {
            self.pending = true;
            self.start_line = lineno;
            self.start_text = line.to_string();
        }

        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.in_quote {
                match ch {
                    // Only the quote itself can be escaped inside a run;
                    // other backslash pairs stay literal for unescape.
                    '\\' if chars.peek() == Some(&'"') => {
                        chars.next();
                        self.buffer.push('"');
                    }
                    '"' => {
                        self.in_quote = false;
                        self.buffer.push('"');
                    }
                    _ => self.buffer.push(ch),
                }
                continue;
            }

            match ch {
                '\\' => match chars.next() {
                    // Escaped special: the literal character, minus the
                    // backslash.
                    Some(next) if self.options.is_special(next) => self.buffer.push(next),
                    // Any other pair is copied verbatim; `\n`, `\\` and
                    // friends are decoded later by unescape.
                    Some(next) => {
                        self.buffer.push('\\');
                        self.buffer.push(next);
                    }
                    // A solo backslash at end of line: continuation. The
                    // next physical line joins with a newline between.
                    None => {
                        self.buffer.push('\n');
                        return Ok(());
                    }
                },
                '"' => {
                    self.in_quote = true;
                    self.quote_line = lineno;
                    self.quote_text = line.to_string();
                    self.buffer.push('"');
                }
                c if c == self.options.separator && self.name.is_none() => {
                    self.name = Some(self.buffer.trim().to_string());
                    self.buffer.clear();
                }
                _ => self.buffer.push(ch),
            }
        }

        if self.in_quote {
            // The quoted run continues on the next line.
            return Ok(());
        }
        self.flush()
    }

    /// Finalizes the pending property, if any: trims the name, resolves the
    /// value (trim, strip one outer quote pair, unescape), and stores it in
    /// the current section, or the default section if no header has been
    /// seen yet.
    fn flush(&mut self) -> Result<()> {
        if !self.pending {
            return Ok(());
        }
        self.pending = false;
        let name = self.name.take();
        let raw = std::mem::take(&mut self.buffer);

        let name = match name {
            Some(name) => name,
            None => {
                // Accumulated text with no separator anywhere on the
                // logical line. Whitespace-only leftovers are dropped.
                if raw.trim().is_empty() {
                    return Ok(());
                }
                return Err(Error::invalid_line(self.start_line, &self.start_text));
            }
        };
        if name.is_empty() {
            return Err(Error::missing_property_name(
                self.start_line,
                &self.start_text,
            ));
        }

        let value = self.resolve_value(&raw);
        let section = self
            .current_section
            .clone()
            .unwrap_or_else(|| self.options.default_section.clone());
        self.sections
            .entry(section)
            .or_default()
            .insert(name, value);
        Ok(())
    }

    /// Trim, strip one surrounding quote pair if present, then unescape.
    ///
    /// Stripping happens after the trim, so quoting protects leading and
    /// trailing whitespace (and embedded newlines) in a value.
    fn resolve_value(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let inner = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        self.options.unescape_value(inner)
    }

    fn finish(mut self) -> Result<Document> {
        if self.in_quote {
            return Err(Error::unmatched_quote(self.quote_line, &self.quote_text));
        }
        self.flush()?;
        let mut doc = Document::with_options(self.options);
        for (name, section) in self.sections {
            doc.set_section(&name, section);
        }
        Ok(doc)
    }
}
