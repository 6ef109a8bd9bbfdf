// src/formatting/writer.rs
//! A text sink that lazily indents each line.
//!
//! Indentation is two spaces per level, emitted at most once per line: the
//! first append after a line break writes the prefix and marks the line
//! dirty; later appends on the same line add nothing. `cr` clears the flag.

use crate::error::AppError;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct IndentWriter {
    buf: String,
    indent: usize,
    dirty: bool,
}

impl IndentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the current line, indenting first if the line is clean.
    pub fn append(&mut self, text: &str) -> Result<(), AppError> {
        if !self.dirty {
            self.dirty = true;
            for _ in 0..self.indent {
                self.buf.write_str("  ")?;
            }
        }
        self.buf.write_str(text)?;
        Ok(())
    }

    /// End the current line.
    pub fn cr(&mut self) {
        self.dirty = false;
        self.buf.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
