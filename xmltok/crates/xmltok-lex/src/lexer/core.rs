//! Core tokenizer implementation.
//!
//! This module contains the `Tokenizer` session type, the main dispatch
//! loop and the reset/reload operations.

use std::path::Path;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::Result;
use crate::lexer::dispatch::{classify, Construct};
use crate::source;
use crate::token::Token;

/// Tokenizer session for XML markup.
///
/// A session owns the buffered document text and a cursor into it. Each
/// call to [`tokenize`](Tokenizer::tokenize) scans from the cursor to the
/// end of the text; once exhausted, the session only produces tokens again
/// after [`reset`](Tokenizer::reset) or
/// [`load_from_file`](Tokenizer::load_from_file).
///
/// # Example
///
/// ```
/// use xmltok_lex::{Token, TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::with_source("<book>XML &amp; Parsing</book>");
/// let tokens = tokenizer.tokenize().unwrap();
///
/// assert_eq!(
///     tokens,
///     vec![
///         Token::new(TokenKind::OpenTag, "book"),
///         Token::new(TokenKind::Text, "XML &amp; Parsing"),
///         Token::new(TokenKind::CloseTag, "book"),
///     ]
/// );
/// assert!(tokenizer.tokenize().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Cursor over the buffered text.
    pub(crate) cursor: Cursor,
}

impl Tokenizer {
    /// Creates a session with no text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over `source`.
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Creates a session over the contents of the `.xml` file at `path`.
    ///
    /// # Errors
    ///
    /// See [`load_from_file`](Tokenizer::load_from_file).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut tokenizer = Self::new();
        tokenizer.load_from_file(path)?;
        Ok(tokenizer)
    }

    /// Replaces the buffered text and rewinds the cursor to the start.
    ///
    /// Tokens produced before the reset are unaffected.
    pub fn reset(&mut self, source: impl Into<String>) {
        self.cursor.reset(source);
        debug!(bytes = self.cursor.source().len(), "tokenizer reset");
    }

    /// Loads the `.xml` file at `path` and resets the session with its
    /// contents.
    ///
    /// On failure the session is left untouched.
    ///
    /// # Errors
    ///
    /// - [`LexError::SourceNotFound`](crate::LexError::SourceNotFound)
    /// - [`LexError::SourceNotAFile`](crate::LexError::SourceNotAFile)
    /// - [`LexError::SourceWrongExtension`](crate::LexError::SourceWrongExtension)
    /// - [`LexError::Io`](crate::LexError::Io) if the validated file cannot be read
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let text = source::read_source(path.as_ref())?;
        self.reset(text);
        Ok(())
    }

    /// Tokenizes everything from the cursor to the end of the text.
    ///
    /// Returns an empty vector if the session is already exhausted.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedConstruct`](crate::LexError::UnterminatedConstruct)
    /// if a prolog, doctype, comment or CDATA section is missing its closing
    /// delimiter. The session is exhausted afterwards. Iterate the tokenizer
    /// directly to keep the tokens scanned before the failure.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token?);
        }
        Ok(tokens)
    }

    /// Scans the next construct and returns its token.
    ///
    /// Returns `None` once the cursor reaches the end of the text. After an
    /// error the cursor is moved to the end, so the following call returns
    /// `None`.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        loop {
            if self.cursor.is_at_end() {
                return None;
            }

            let start = self.cursor.location();
            let current = self.cursor.advance();

            let result = match classify(current, self.cursor.remaining()) {
                Construct::Whitespace => continue,
                Construct::Prolog => self.extract_prolog(start),
                Construct::Comment => self.extract_comment(start),
                Construct::Cdata => self.extract_cdata(start),
                Construct::Doctype => self.extract_doctype(start),
                Construct::CloseTag => Ok(self.extract_close_tag()),
                Construct::Tag => Ok(self.extract_open_or_self_closing_tag()),
                Construct::Text => Ok(self.extract_text(start.offset)),
            };

            match &result {
                Ok(token) => trace!(kind = %token.kind(), content = token.content(), "token"),
                Err(_) => self.cursor.finish(),
            }
            return Some(result);
        }
    }

    /// Returns the current byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once every character of the text has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Returns the buffered text of the current session.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Tokenizer {}
