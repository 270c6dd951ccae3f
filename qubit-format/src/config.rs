//! Formatter configuration

/// Delimiter pair around the element list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Braces,
    Brackets,
    Parens,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Braces
    }
}

impl Delimiter {
    pub fn open(&self) -> char {
        match self {
            Delimiter::Braces => '{',
            Delimiter::Brackets => '[',
            Delimiter::Parens => '(',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Delimiter::Braces => '}',
            Delimiter::Brackets => ']',
            Delimiter::Parens => ')',
        }
    }
}

/// Configuration for rendering and parsing superposition literals
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Delimiters around the element list
    pub delimiter: Delimiter,

    /// Text between consecutive elements
    pub separator: String,

    /// Pad the inside of the delimiters with one space
    pub inner_padding: bool,

    /// Prefix the literal with its state (`any`, `all`, `collapsed(true)`)
    pub annotate_state: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            separator: " ".to_string(),
            inner_padding: true,
            annotate_state: false,
        }
    }
}

impl FormatConfig {
    /// Create a compact configuration (no padding, comma separated)
    pub fn compact() -> Self {
        Self {
            separator: ",".to_string(),
            inner_padding: false,
            ..Default::default()
        }
    }

    /// Create a configuration that shows quantifier and collapse state
    pub fn annotated() -> Self {
        Self {
            annotate_state: true,
            ..Default::default()
        }
    }

    /// Characters accepted between elements when parsing strictly
    pub(crate) fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || self.separator.trim().contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.delimiter, Delimiter::Braces);
        assert_eq!(config.separator, " ");
        assert!(config.inner_padding);
        assert!(!config.annotate_state);
    }

    #[test]
    fn test_delimiter_pairs() {
        assert_eq!(Delimiter::Braces.open(), '{');
        assert_eq!(Delimiter::Brackets.close(), ']');
        assert_eq!(Delimiter::Parens.open(), '(');
    }

    #[test]
    fn test_compact_config() {
        let config = FormatConfig::compact();
        assert!(!config.inner_padding);
        assert!(config.is_separator(','));
        assert!(config.is_separator(' '));
        assert!(!config.is_separator(';'));
    }
}
