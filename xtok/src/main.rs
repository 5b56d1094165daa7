//! xtok - Command-line driver for the xmltok XML tokenizer.
//!
//! Parses arguments with clap, installs the tracing subscriber, loads the
//! optional `xtok.toml` and dispatches to the selected subcommand.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    run_init, run_stats, run_tokens, InitArgs, StatsArgs, TokensArgs,
};
use config::Config;
use error::{Result, XtokError};

/// xtok - Tokenize XML documents
///
/// Splits XML files into prolog, doctype, tag, text, comment and CDATA
/// tokens without building a document tree.
#[derive(Parser, Debug)]
#[command(name = "xtok")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize XML documents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "XTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "XTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "XTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the xtok CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each document
    ///
    /// Files are processed in order; a blank line separates documents in
    /// text output and each document is one JSON array in JSON output.
    Tokens(TokensCommand),

    /// Count tokens of each kind per document
    Stats(StatsCommand),

    /// Write a default xtok.toml
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// XML files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print a token count after each document
    #[arg(short, long)]
    summary: bool,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// XML files to analyse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing xtok.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| XtokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                files: args.files,
                format: args.format,
                summary: args.summary,
            },
            config,
        ),
        Commands::Stats(args) => run_stats(
            StatsArgs {
                files: args.files,
                format: args.format,
            },
            config,
        ),
        Commands::Init(args) => {
            let written = run_init(InitArgs {
                path: args.path,
                force: args.force,
            })?;
            println!("{}", written.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["xtok", "tokens", "a.xml", "b.xml"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
            assert_eq!(args.format, None);
            assert!(!args.summary);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["xtok", "tokens", "a.xml", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_summary() {
        let cli = Cli::parse_from(["xtok", "tokens", "-s", "a.xml"]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.summary);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_files() {
        assert!(Cli::try_parse_from(["xtok", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["xtok", "stats", "a.xml", "-F", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["xtok", "stats", "a.xml"]);
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn test_cli_parse_init_with_force() {
        let cli = Cli::parse_from(["xtok", "init", "--path", "/tmp/proj", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/proj")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["xtok", "tokens", "a.xml", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["xtok", "--config", "/path/to/xtok.toml", "stats", "a.xml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/xtok.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["xtok", "--no-color", "stats", "a.xml"]);
        assert!(cli.no_color);
    }
}
