//! xmltok-lex - Lexical scanner for XML markup
//!
//! This crate converts XML text into an ordered sequence of typed tokens
//! without building a document tree. It does not validate well-formedness,
//! decode entities or parse attributes: tag tokens carry only the element
//! name and text tokens carry the raw character run.
//!
//! # Example Usage
//!
//! ```
//! use xmltok_lex::{Token, TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::with_source(
//!     "<library><book><title>XML Parsing</title></book></library>",
//! );
//! let tokens = tokenizer.tokenize().unwrap();
//!
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[3], Token::new(TokenKind::Text, "XML Parsing"));
//!
//! // One session can be reused for several documents.
//! tokenizer.reset("<?xml version=\"1.0\"?><note/>");
//! for token in tokenizer.tokenize().unwrap() {
//!     println!("{token}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Tokenizer session and extraction rules
//! - [`cursor`] - Character cursor over the buffered text
//! - [`source`] - Loading documents from `.xml` files
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! | Kind | Recognized by | Content |
//! |---|---|---|
//! | `Prolog` | `<?` ... `?>` | whole span |
//! | `Doctype` | `<!` ... `>` | whole span |
//! | `Comment` | `<!--` ... `-->` | whole span |
//! | `Cdata` | `<![CDATA[` ... `]]>` | whole span |
//! | `CloseTag` | `</name>` | name |
//! | `SelfClosingTag` | `<name/>` | name |
//! | `OpenTag` | `<name>` | name |
//! | `Text` | anything else up to `<` | raw text |
//!
//! Whitespace between constructs (space, tab, newline, carriage return) is
//! skipped and produces no token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Position, EOF_CHAR};
pub use error::{LexError, LexErrorKind, Result};
pub use lexer::Tokenizer;
pub use source::{read_source, validate_source_path};
pub use token::{Token, TokenKind};

/// Tokenizes `source` in a fresh session.
///
/// # Errors
///
/// [`LexError::UnterminatedConstruct`] on a prolog, doctype, comment or
/// CDATA section without its closing delimiter.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Tokenizer::with_source(source).tokenize()
}
