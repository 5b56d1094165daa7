//! Tokens command implementation.
//!
//! Prints the token stream of each input document, either as rendered
//! lines or as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::commands::common::{load_tokens, write_json, write_text, OutputFormat};
use crate::config::Config;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Documents to tokenize, in order.
    pub files: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Print a count line after each listing; falls back to the configured one.
    pub summary: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    format: OutputFormat,
    summary: bool,
}

impl TokensCommand {
    /// Create a new TokensCommand, resolving defaults from `config`.
    pub fn new(args: TokensArgs, config: &Config) -> Self {
        let format = args.format.unwrap_or(config.output.format);
        let summary = args.summary || config.output.summary;
        Self {
            args,
            format,
            summary,
        }
    }

    /// Tokenize every file into `out`, stopping at the first failure.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for (index, path) in self.args.files.iter().enumerate() {
            let tokens = load_tokens(path)
                .with_context(|| format!("failed to tokenize {}", path.display()))?;

            match self.format {
                OutputFormat::Text => {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    write_text(out, &tokens)?;
                    if self.summary {
                        writeln!(out, "{}: {} tokens", path.display(), tokens.len())?;
                    }
                }
                OutputFormat::Json => write_json(out, &tokens)?,
            }

            info!(path = %path.display(), tokens = tokens.len(), "done");
        }
        Ok(())
    }
}

/// Run the tokens command against standard output.
pub fn run_tokens(args: TokensArgs, config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    TokensCommand::new(args, config).run(&mut out)?;
    out.flush()?;
    Ok(())
}
