//! Element tag lexing.
//!
//! Tag tokens carry only the element name. Attributes and any other text
//! between the name and the closing `>` are skipped without validation.

use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl Tokenizer {
    /// Extracts a `</name ...>` close tag. The cursor sits on the `/`.
    pub(crate) fn extract_close_tag(&mut self) -> Token {
        self.cursor.advance();
        let name = self.extract_tag_name();
        self.skip_past_gt();
        Token::new(TokenKind::CloseTag, name)
    }

    /// Extracts a `<name ...>` open tag or `<name .../>` self-closing tag.
    /// The cursor sits just past the `<`.
    pub(crate) fn extract_open_or_self_closing_tag(&mut self) -> Token {
        let name = self.extract_tag_name();

        while !self.cursor.is_at_end() && !matches!(self.cursor.peek(), '>' | '/') {
            self.cursor.advance();
        }

        if self.cursor.peek() == '/' {
            self.cursor.advance();
            if self.cursor.peek() == '>' {
                self.cursor.advance();
                return Token::new(TokenKind::SelfClosingTag, name);
            }
        }

        self.skip_past_gt();
        Token::new(TokenKind::OpenTag, name)
    }

    /// Accumulates a tag name up to a space, `>`, `/` or end of input,
    /// leaving the terminator unconsumed.
    pub(crate) fn extract_tag_name(&mut self) -> String {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && !matches!(self.cursor.peek(), ' ' | '>' | '/') {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }

    /// Moves the cursor just past the next `>`, or to the end of input when
    /// there is none.
    fn skip_past_gt(&mut self) {
        match self.cursor.find(">") {
            Some(gt) => self.cursor.advance_bytes(gt + 1 - self.cursor.position()),
            None => self.cursor.finish(),
        }
    }
}
