//! Parsing of delimited literals back into sets
//!
//! Two modes share one scanner. The lenient parser skips anything it cannot
//! read and never fails; the strict parser reports the first problem.

use std::str::FromStr;

use qubit_superposition::{Element, SuperpositionSet};
use tracing::debug;

use crate::FormatError;
use crate::config::FormatConfig;

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Number { text: &'a str, pos: usize },
    Stray { ch: char, pos: usize },
    Close,
}

/// Scanner over the body of a literal (everything after the opening delimiter)
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    close: char,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, pos: usize, close: char) -> Self {
        Self { text, pos, close }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..)?.chars().next()
    }

    fn starts_number(&self, at: usize) -> bool {
        match self.peek_at(at) {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => matches!(self.peek_at(at + 1), Some(d) if d.is_ascii_digit()),
            _ => false,
        }
    }

    fn digits(&mut self) {
        while matches!(self.peek_at(self.pos), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Token<'a> {
        let start = self.pos;
        if self.peek_at(self.pos) == Some('-') {
            self.pos += 1;
        }
        self.digits();
        // At most one fractional part, only when a digit follows
        if self.peek_at(self.pos) == Some('.')
            && matches!(self.peek_at(self.pos + 1), Some(d) if d.is_ascii_digit())
        {
            self.pos += 1;
            self.digits();
        }
        Token::Number {
            text: &self.text[start..self.pos],
            pos: start,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek_at(self.pos)?;
        if c == self.close {
            self.pos += c.len_utf8();
            return Some(Token::Close);
        }
        if self.starts_number(self.pos) {
            return Some(self.number());
        }
        let pos = self.pos;
        self.pos += c.len_utf8();
        Some(Token::Stray { ch: c, pos })
    }
}

/// Parse with default delimiters, skipping anything unreadable
pub fn parse<T: Element + FromStr>(text: &str) -> SuperpositionSet<T> {
    parse_with_config(text, &FormatConfig::default())
}

/// Lenient parse: skips everything up to the opening delimiter, ignores
/// non-numeric characters and unparsable numbers, stops at the closing
/// delimiter or the end of input. Missing opening delimiter yields an empty
/// set, so "empty" and "malformed" look the same here.
pub fn parse_with_config<T: Element + FromStr>(
    text: &str,
    config: &FormatConfig,
) -> SuperpositionSet<T> {
    let mut set = SuperpositionSet::new();
    let Some(open) = text.find(config.delimiter.open()) else {
        debug!("no opening delimiter, nothing to parse");
        return set;
    };

    let body_start = open + config.delimiter.open().len_utf8();
    for token in Scanner::new(text, body_start, config.delimiter.close()) {
        match token {
            Token::Close => break,
            Token::Number { text, .. } => match text.parse::<T>() {
                Ok(value) => {
                    set.insert(value);
                }
                Err(_) => debug!(token = text, "skipping unparsable number"),
            },
            Token::Stray { .. } => {}
        }
    }
    set
}

/// Strict parse with default delimiters
pub fn parse_strict<T: Element + FromStr>(text: &str) -> Result<SuperpositionSet<T>, FormatError> {
    parse_strict_with_config(text, &FormatConfig::default())
}

/// Strict parse: only whitespace around the literal, only separators between
/// numbers, every number must parse and the literal must be closed.
pub fn parse_strict_with_config<T: Element + FromStr>(
    text: &str,
    config: &FormatConfig,
) -> Result<SuperpositionSet<T>, FormatError> {
    let open = config.delimiter.open();
    let close = config.delimiter.close();

    let leading = text.len() - text.trim_start().len();
    if !text[leading..].starts_with(open) {
        return Err(FormatError::MissingDelimiter { expected: open });
    }

    let mut set = SuperpositionSet::new();
    let mut scanner = Scanner::new(text, leading + open.len_utf8(), close);
    let mut closed = false;

    for token in scanner.by_ref() {
        match token {
            Token::Close => {
                closed = true;
                break;
            }
            Token::Number { text, pos } => {
                let value = text.parse::<T>().map_err(|_| FormatError::InvalidNumber {
                    token: text.to_string(),
                    pos,
                })?;
                set.insert(value);
            }
            Token::Stray { ch, .. } if config.is_separator(ch) => {}
            Token::Stray { ch, pos } => return Err(FormatError::UnexpectedChar { ch, pos }),
        }
    }

    if !closed {
        return Err(FormatError::MissingDelimiter { expected: close });
    }
    if let Some((offset, ch)) = text[scanner.pos..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
    {
        return Err(FormatError::UnexpectedChar {
            ch,
            pos: scanner.pos + offset,
        });
    }
    Ok(set)
}
