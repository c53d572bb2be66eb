//! Ordered access to the whitespace-separated tokens of one normalized line.

use crate::error::LineError;
use crate::NO_STEM;
use std::str::FromStr;

/// A field vector with a read cursor.
///
/// Attribute extractors advance the cursor and report the field name on failure,
/// so a short or mistyped line turns into a [`LineError`] instead of a panic.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
            cursor: 0,
        }
    }

    /// Token at an absolute position, ignoring the cursor.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Read `present` stems from the front and pad with [`NO_STEM`] up to `N`.
    /// Leaves the cursor just past the stems.
    pub fn stems<const N: usize>(&mut self, present: usize) -> [String; N] {
        let start = self.cursor;
        let stems = std::array::from_fn(|i| match self.tokens.get(start + i) {
            Some(token) if i < present => token.to_string(),
            _ => NO_STEM.to_string(),
        });
        self.cursor = (start + present).min(self.tokens.len());
        stems
    }

    /// Skip a token the caller has already inspected (e.g. the POS tag).
    pub fn skip(&mut self, field: &'static str) -> Result<(), LineError> {
        self.next(field).map(|_| ())
    }

    pub fn text(&mut self, field: &'static str) -> Result<String, LineError> {
        self.next(field).map(str::to_string)
    }

    pub fn int<T: FromStr>(&mut self, field: &'static str) -> Result<T, LineError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| LineError::NotANumber {
            field,
            value: token.to_string(),
        })
    }

    /// Everything after the cursor, rejoined with single spaces.
    pub fn rest(&mut self) -> String {
        let rest = self.tokens[self.cursor..].join(" ");
        self.cursor = self.tokens.len();
        rest
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str, LineError> {
        let token = self.tokens.get(self.cursor).copied().ok_or(LineError::MissingField {
            field,
            index: self.cursor,
        })?;
        self.cursor += 1;
        Ok(token)
    }
}
