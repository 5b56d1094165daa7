//! Stats command implementation.
//!
//! Reports how many tokens of each kind every input document produces.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use crate::commands::common::{kind_counts, load_tokens, OutputFormat};
use crate::config::Config;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Documents to analyse, in order.
    pub files: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
}

/// JSON shape of one file's statistics.
#[derive(Debug, Serialize)]
struct FileStats {
    path: String,
    counts: BTreeMap<&'static str, usize>,
    total: usize,
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
    format: OutputFormat,
}

impl StatsCommand {
    /// Create a new StatsCommand, resolving defaults from `config`.
    pub fn new(args: StatsArgs, config: &Config) -> Self {
        let format = args.format.unwrap_or(config.output.format);
        Self { args, format }
    }

    /// Count tokens in every file into `out`, stopping at the first failure.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for path in &self.args.files {
            let tokens = load_tokens(path)
                .with_context(|| format!("failed to tokenize {}", path.display()))?;
            let counts = kind_counts(&tokens);

            match self.format {
                OutputFormat::Text => {
                    writeln!(out, "{}", path.display())?;
                    for (kind, count) in &counts {
                        writeln!(out, "  {:<16} {:>6}", kind.name(), count)?;
                    }
                    writeln!(out, "  {:<16} {:>6}", "total", tokens.len())?;
                }
                OutputFormat::Json => {
                    let stats = FileStats {
                        path: path.display().to_string(),
                        counts: counts
                            .iter()
                            .map(|(kind, &count)| (kind.name(), count))
                            .collect(),
                        total: tokens.len(),
                    };
                    serde_json::to_writer(&mut *out, &stats)?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }
}

/// Run the stats command against standard output.
pub fn run_stats(args: StatsArgs, config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    StatsCommand::new(args, config).run(&mut out)?;
    out.flush()?;
    Ok(())
}
