//! Pretty-printer utilities
//!
//! Low-level string building for a delimited element list.

use crate::config::FormatConfig;

/// Builds one delimited literal, placing separators between items
pub struct Printer<'c> {
    config: &'c FormatConfig,
    buffer: String,
    items: usize,
}

impl<'c> Printer<'c> {
    pub fn new(config: &'c FormatConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            items: 0,
        }
    }

    /// Write a prefix before the opening delimiter
    pub fn label(&mut self, label: &str) {
        self.buffer.push_str(label);
        self.buffer.push(' ');
    }

    /// Write the opening delimiter
    pub fn open(&mut self) {
        self.buffer.push(self.config.delimiter.open());
        if self.config.inner_padding {
            self.buffer.push(' ');
        }
    }

    /// Write one element
    pub fn item(&mut self, value: &str) {
        if self.items > 0 {
            self.buffer.push_str(&self.config.separator);
        }
        self.buffer.push_str(value);
        self.items += 1;
    }

    /// Write the closing delimiter and return the output
    pub fn finish(mut self) -> String {
        if self.config.inner_padding && self.items > 0 {
            self.buffer.push(' ');
        }
        self.buffer.push(self.config.delimiter.close());
        self.buffer
    }
}
