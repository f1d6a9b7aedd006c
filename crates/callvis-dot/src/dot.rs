//! DOT text utilities shared by attribute formatting and rendering.

use std::fmt::Write;

use callvis_error::{Error, Result};

/// One indentation step in emitted documents.
pub const INDENT: &str = "    ";

/// Escape a string for use inside a double-quoted DOT string.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote and escape a DOT identifier or value: `a"b` becomes `"a\"b"`.
pub fn quote(input: &str) -> String {
    format!("\"{}\"", escape(input))
}

/// Render an attribute name: plain DOT identifiers (`[A-Za-z_][A-Za-z0-9_]*`)
/// are written as-is, anything else is quoted.
pub fn attr_key(key: &str) -> String {
    let mut chars = key.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain { key.to_string() } else { quote(key) }
}

/// Buffered writer for a DOT document.
///
/// Every line is written at the current indentation level. Formatting
/// failures surface as `InvalidFormat` errors.
pub struct DotWriter {
    output: String,
    indent: usize,
}

impl DotWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            indent: 0,
        }
    }

    /// Write one line at the current indentation.
    pub fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.write_fmt(args).map_err(Error::invalid_format)?;
        self.output.push('\n');
        Ok(())
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write an opening line and indent everything after it.
    pub fn open(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        self.line(args)?;
        self.indent += 1;
        Ok(())
    }

    /// Dedent and write the closing brace.
    pub fn close(&mut self) -> Result<()> {
        self.indent = self.indent.saturating_sub(1);
        self.line(format_args!("}}"))
    }

    /// Finish and return the DOT string.
    pub fn finish(self) -> String {
        self.output
    }
}
