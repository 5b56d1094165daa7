//! Error types for the xmltok-lex crate.
//!
//! Source loading and tokenization share one error enum so that callers of
//! [`Tokenizer::from_file`](crate::Tokenizer::from_file) followed by
//! [`Tokenizer::tokenize`](crate::Tokenizer::tokenize) handle a single type.

use std::path::PathBuf;

use thiserror::Error;

use crate::cursor::Position;
use crate::token::TokenKind;

/// Errors reported by the source loader and the tokenizer.
#[derive(Debug, Error)]
pub enum LexError {
    /// The requested source path does not exist.
    #[error("{} doesn't exist", .path.display())]
    SourceNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The source path exists but is not a regular file.
    #[error("{} isn't a file", .path.display())]
    SourceNotAFile {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The source path does not have the `.xml` extension.
    #[error("{} isn't .xml file", .path.display())]
    SourceWrongExtension {
        /// The path that was requested.
        path: PathBuf,
    },

    /// A prolog, doctype, comment or CDATA section has no closing
    /// delimiter before the end of input.
    #[error("unterminated {} starting at {at}: expected `{terminator}`", .kind.description())]
    UnterminatedConstruct {
        /// Kind of construct that was being scanned.
        kind: TokenKind,
        /// The closing delimiter that was never found.
        terminator: &'static str,
        /// Location of the construct's opening `<`.
        at: Position,
    },

    /// Reading a validated source file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless tag for branching on a [`LexError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::SourceNotFound`].
    SourceNotFound,
    /// See [`LexError::SourceNotAFile`].
    SourceNotAFile,
    /// See [`LexError::SourceWrongExtension`].
    SourceWrongExtension,
    /// See [`LexError::UnterminatedConstruct`].
    UnterminatedConstruct,
    /// See [`LexError::Io`].
    Io,
}

impl LexError {
    /// Returns the fieldless kind of this error.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::SourceNotFound { .. } => LexErrorKind::SourceNotFound,
            LexError::SourceNotAFile { .. } => LexErrorKind::SourceNotAFile,
            LexError::SourceWrongExtension { .. } => LexErrorKind::SourceWrongExtension,
            LexError::UnterminatedConstruct { .. } => LexErrorKind::UnterminatedConstruct,
            LexError::Io { .. } => LexErrorKind::Io,
        }
    }

    /// Returns true if the error came from loading a source file rather
    /// than from scanning text.
    pub fn is_source_error(&self) -> bool {
        !matches!(self, LexError::UnterminatedConstruct { .. })
    }
}

/// Result type alias using [`LexError`].
pub type Result<T> = std::result::Result<T, LexError>;
