//! Common types and utilities for xtok commands.
//!
//! Shared output format handling and token rendering used by every
//! subcommand.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xmltok_lex::{Token, TokenKind, Tokenizer};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported renderings for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token.
    #[default]
    Text,
    /// JSON, one document per input file.
    Json,
}

// ============================================================================
// Token Rendering
// ============================================================================

/// JSON shape of a single token.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    /// Upper-case kind name, e.g. `OPEN_TAG`.
    pub kind: &'static str,
    /// Token content as produced by the tokenizer.
    pub content: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind().name(),
            content: token.content(),
        }
    }
}

/// Loads and tokenizes the `.xml` file at `path`.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let tokens = Tokenizer::from_file(path)?.tokenize()?;
    debug!(path = %path.display(), tokens = tokens.len(), "tokenized file");
    Ok(tokens)
}

/// Writes one rendered token per line.
pub fn write_text(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Writes `tokens` as a single-line JSON array of [`TokenRecord`]s.
pub fn write_json(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Counts tokens per kind. Every kind is present, including those with a
/// zero count.
pub fn kind_counts(tokens: &[Token]) -> BTreeMap<TokenKind, usize> {
    let mut counts: BTreeMap<TokenKind, usize> =
        TokenKind::ALL.iter().map(|&kind| (kind, 0)).collect();
    for token in tokens {
        *counts.entry(token.kind()).or_insert(0) += 1;
    }
    counts
}
