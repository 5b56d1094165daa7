//! Character cursor for traversing buffered XML text.
//!
//! This module provides the `Cursor` struct which owns the text of one
//! tokenizer session and maintains the read position into it. It handles
//! UTF-8 encoding correctly and tracks line/column information for error
//! reporting.

use std::fmt;

/// Sentinel character returned by [`Cursor::peek`] and [`Cursor::advance`]
/// once the cursor has reached the end of the text.
pub const EOF_CHAR: char = '\0';

/// A cursor over the buffered text of a tokenizer session.
///
/// The position is a byte offset that only moves forward until the cursor
/// is [`reset`](Cursor::reset) with new text.
///
/// # Example
///
/// ```
/// use xmltok_lex::cursor::{Cursor, EOF_CHAR};
///
/// let mut cursor = Cursor::new("<a>");
///
/// assert_eq!(cursor.peek(), '<');
/// assert_eq!(cursor.advance(), '<');
/// assert_eq!(cursor.advance(), 'a');
/// assert_eq!(cursor.advance(), '>');
/// assert_eq!(cursor.advance(), EOF_CHAR);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    /// The buffered text being traversed.
    source: String,

    /// Current byte position in the text.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the current position without consuming it.
    ///
    /// Returns [`EOF_CHAR`] if at the end of the text.
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character starting `offset` bytes past the current
    /// position, or [`EOF_CHAR`] if that is past the end of the text.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII (markup delimiters are all ASCII)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Consumes and returns the character at the current position.
    ///
    /// At the end of the text this returns [`EOF_CHAR`] and leaves the
    /// position unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use xmltok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), 'a');
    /// assert_eq!(cursor.peek(), 'b');
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let c = self.peek();
        if self.is_at_end() {
            return c;
        }

        self.position += c.len_utf8();
        self.bump_location(c);
        c
    }

    /// Advances by `count` bytes, clamped to the end of the text.
    ///
    /// The target position must fall on a character boundary; callers pass
    /// offsets obtained from [`find`](Cursor::find) or delimiter lengths.
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(end));

        let start = self.position;
        self.position = end;

        // Walk the skipped text for line tracking.
        let (mut line, mut column) = (self.line, self.column);
        for c in self.source[start..end].chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        self.line = line;
        self.column = column;
    }

    /// Moves the cursor to the end of the text.
    pub fn finish(&mut self) {
        self.advance_bytes(self.source.len() - self.position);
    }

    /// Returns true if the cursor is at the end of the text.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the unconsumed text starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Finds the next occurrence of `needle` at or after the current
    /// position and returns its absolute byte offset.
    ///
    /// # Example
    ///
    /// ```
    /// use xmltok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<!-- x -->");
    /// cursor.advance();
    /// assert_eq!(cursor.find("-->"), Some(7));
    /// assert_eq!(cursor.find("]]>"), None);
    /// ```
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.remaining()
            .find(needle)
            .map(|relative| self.position + relative)
    }

    /// Returns the current byte position in the text.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the full location (offset, line and column) of the cursor.
    pub fn location(&self) -> Position {
        Position {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the text from byte offset `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }

    /// Returns the text from the current position to the end.
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Returns the full buffered text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replaces the buffered text and rewinds to the start.
    pub fn reset(&mut self, source: impl Into<String>) {
        *self = Self::new(source);
    }

    fn bump_location(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A location in the buffered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the text.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
