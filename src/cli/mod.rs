//! Command-line interface for secret-fetcher
//!
//! Resolves source paths once into [`crate::config::Settings`], then either fetches a single
//! key or lists the available keys.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::IsTerminal;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{resolve_settings, SourceOptions};
use crate::utils::home_dir;

mod fetch;
mod list;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("missing key (pass a KEY to fetch, or --list to see available keys)")]
    MissingKey,

    #[error("{0} (see --help)")]
    Usage(String),
}

/// Fetch the value for a key from layered JSON secrets files
#[derive(Parser)]
#[command(name = "secret-fetcher")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"FILES:
    /etc/secret-fetcher/secrets.json   System-wide secrets (optional)
    ~/.secret.json                     User secrets, override system entries

FORMAT:
    {"secrets": [{"key": "api", "value": "nop", "enc": "rot13"}]}"#)]
pub struct Cli {
    /// Key to look up
    #[arg(value_name = "KEY")]
    key: Option<String>,

    /// List available keys instead of fetching a value
    #[arg(short, long)]
    list: bool,

    /// Print the key list as a JSON array (with --list)
    #[arg(long, requires = "list")]
    json: bool,

    /// Secrets file path; a file named here must exist and parse
    #[arg(
        short = 'f',
        long = "file",
        short_alias = 'c',
        alias = "config",
        value_name = "PATH",
        env = "SECRET_FETCHER_FILE"
    )]
    file: Option<PathBuf>,

    /// System-wide secrets file merged underneath the user file
    #[arg(short = 's', long, value_name = "PATH", env = "SECRET_FETCHER_SYSTEM_FILE")]
    system_file: Option<PathBuf>,

    /// Don't read the system-wide secrets file
    #[arg(long)]
    no_system: bool,

    /// Enable verbose logging on stderr (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

impl Cli {
    fn source_options(&self) -> SourceOptions {
        SourceOptions {
            file: self.file.clone(),
            system_file: self.system_file.clone(),
            no_system: self.no_system,
        }
    }
}

enum Query {
    Fetch(String),
    List { json: bool },
}

/// First paragraph of a clap error on one line, without clap's `error:` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let paragraph: Vec<&str> = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .collect();
    let joined = paragraph.join(" ");
    joined.strip_prefix("error:").unwrap_or(&joined).trim().to_string()
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => return Err(CliError::Usage(usage_message(&err)).into()),
        },
    };

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    let stderr_is_tty = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(stderr_is_tty))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Validate the query before touching any file.
    let query = match (cli.list, &cli.key) {
        (true, _) => Query::List { json: cli.json },
        (false, Some(key)) => Query::Fetch(key.clone()),
        (false, None) => return Err(CliError::MissingKey.into()),
    };

    let settings = resolve_settings(&cli.source_options(), home_dir().as_deref());

    match query {
        Query::Fetch(key) => fetch::run(&settings, &key),
        Query::List { json } => list::run(&settings, json),
    }
}
