//! Source resolution
//!
//! Turns CLI flags, environment variables and built-in defaults into an
//! ordered list of secret sources, with precedence CLI > Env > Defaults.

pub mod resolve;

pub use resolve::{resolve_settings, SourceOptions};

use std::path::PathBuf;

/// System-wide secrets file, merged underneath the user's file.
pub const DEFAULT_SYSTEM_FILE: &str = "/etc/secret-fetcher/secrets.json";

/// User secrets file name, looked up in the home directory.
pub const DEFAULT_USER_FILE_NAME: &str = ".secret.json";

/// One secrets file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub path: PathBuf,
    /// Whether a missing or malformed file aborts the run. Files the user
    /// named explicitly are required; defaulted ones are not.
    pub required: bool,
}

impl SourceSpec {
    pub fn required(path: PathBuf) -> Self {
        Self { path, required: true }
    }

    pub fn optional(path: PathBuf) -> Self {
        Self { path, required: false }
    }
}

/// Resolved run configuration, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Sources in merge order, lowest precedence first.
    pub sources: Vec<SourceSpec>,
}
