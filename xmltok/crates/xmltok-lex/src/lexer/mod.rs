//! Lexer module.
//!
//! The tokenizer is split into small, focused components:
//! - `core` - Tokenizer session, main loop and reset/reload
//! - `dispatch` - Classification of the next construct
//! - `markup` - Delimiter-bounded constructs (prolog, doctype, comment, CDATA)
//! - `tag` - Open, close and self-closing tags
//! - `text` - Character data runs

mod core;
mod dispatch;
mod markup;
mod tag;
mod text;

pub use self::core::Tokenizer;
pub use self::dispatch::{classify, Construct};
