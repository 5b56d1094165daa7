//! Delimiter-bounded constructs.
//!
//! Prologs, doctype declarations, comments and CDATA sections are emitted
//! verbatim: the token spans from the opening `<` through the end of the
//! closing delimiter.

use tracing::debug;

use crate::cursor::Position;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use crate::Tokenizer;

const PROLOG_END: &str = "?>";
const DOCTYPE_END: &str = ">";
const COMMENT_END: &str = "-->";
const CDATA_END: &str = "]]>";

impl Tokenizer {
    /// Extracts a `<?...?>` prolog.
    pub(crate) fn extract_prolog(&mut self, start: Position) -> Result<Token> {
        self.extract_delimited(TokenKind::Prolog, PROLOG_END, start)
    }

    /// Extracts a `<!DOCTYPE ...>` declaration.
    pub(crate) fn extract_doctype(&mut self, start: Position) -> Result<Token> {
        self.extract_delimited(TokenKind::Doctype, DOCTYPE_END, start)
    }

    /// Extracts a `<!--...-->` comment.
    pub(crate) fn extract_comment(&mut self, start: Position) -> Result<Token> {
        self.extract_delimited(TokenKind::Comment, COMMENT_END, start)
    }

    /// Extracts a `<![CDATA[...]]>` section.
    pub(crate) fn extract_cdata(&mut self, start: Position) -> Result<Token> {
        self.extract_delimited(TokenKind::Cdata, CDATA_END, start)
    }

    /// Scans from the cursor for `terminator` and emits the span starting at
    /// `start` (the already-consumed `<`) through the terminator.
    ///
    /// The search starts right after the `<`, so the terminator may overlap
    /// the opening delimiter (`<?>` is a complete prolog).
    fn extract_delimited(
        &mut self,
        kind: TokenKind,
        terminator: &'static str,
        start: Position,
    ) -> Result<Token> {
        let Some(found) = self.cursor.find(terminator) else {
            debug!(kind = %kind, offset = start.offset, "missing {terminator}");
            return Err(LexError::UnterminatedConstruct {
                kind,
                terminator,
                at: start,
            });
        };

        let end = found + terminator.len();
        self.cursor.advance_bytes(end - self.cursor.position());
        Ok(Token::new(kind, self.cursor.slice_from(start.offset)))
    }
}
