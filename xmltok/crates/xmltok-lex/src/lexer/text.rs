//! Character data lexing.

use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl Tokenizer {
    /// Extracts a text run beginning at byte offset `start`, whose first
    /// character has already been consumed. Stops before the next `<`.
    ///
    /// Whitespace inside and after the run is kept verbatim and entities
    /// are left undecoded.
    pub(crate) fn extract_text(&mut self, start: usize) -> Token {
        while !self.cursor.is_at_end() && self.cursor.peek() != '<' {
            self.cursor.advance();
        }
        Token::new(TokenKind::Text, self.cursor.slice_from(start))
    }
}
