//! Resolve source paths from flags, environment and defaults

use super::{Settings, SourceSpec, DEFAULT_SYSTEM_FILE, DEFAULT_USER_FILE_NAME};
use crate::utils::expand_home;
use std::path::{Path, PathBuf};

/// Raw source choices as collected by the CLI. Environment variables are
/// already folded in by clap, so `file` is `Some` whenever the user named a
/// file by flag or by `SECRET_FETCHER_FILE`.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub file: Option<PathBuf>,
    pub system_file: Option<PathBuf>,
    pub no_system: bool,
}

/// Build the ordered source list: system-wide file first, user file last.
///
/// The system-wide file is always optional. The user file is required when it
/// was named explicitly, and optional when it falls back to `~/.secret.json`.
/// Without a home directory the default user file is skipped.
pub fn resolve_settings(options: &SourceOptions, home: Option<&Path>) -> Settings {
    let mut sources = Vec::with_capacity(2);

    if !options.no_system {
        let system = options
            .system_file
            .as_deref()
            .map(|p| expand_home(p, home))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_FILE));
        tracing::debug!("Using system secrets file {}", system.display());
        sources.push(SourceSpec::optional(system));
    }

    match (&options.file, home) {
        (Some(file), _) => {
            let path = expand_home(file, home);
            tracing::debug!("Using secrets file {}", path.display());
            sources.push(SourceSpec::required(path));
        }
        (None, Some(home)) => {
            let path = home.join(DEFAULT_USER_FILE_NAME);
            tracing::debug!("Using default secrets file {}", path.display());
            sources.push(SourceSpec::optional(path));
        }
        (None, None) => {
            tracing::warn!("No home directory found; skipping default {}", DEFAULT_USER_FILE_NAME);
        }
    }

    Settings { sources }
}
