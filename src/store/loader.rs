//! Secret source loading

use crate::config::SourceSpec;
use crate::domain::Store;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read secrets file {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid secrets file {}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a `{"secrets": [...]}` document.
///
/// Records missing `key` or `value` get empty strings; a document without a
/// `secrets` array is an empty store. Duplicate keys are kept as-is.
pub fn parse_store(bytes: &[u8]) -> serde_json::Result<Store> {
    serde_json::from_slice(bytes)
}

/// Load a source the user explicitly asked for. Any failure is an error.
pub fn load_required(path: &Path) -> Result<Store, LoadError> {
    let bytes = fs::read(path)
        .map_err(|source| LoadError::SourceUnavailable { path: path.to_path_buf(), source })?;

    let store = parse_store(&bytes)
        .map_err(|source| LoadError::MalformedSource { path: path.to_path_buf(), source })?;

    tracing::debug!("Loaded {} secrets from {}", store.len(), path.display());
    Ok(store)
}

/// Load an optional source, degrading to an empty store on any failure.
pub fn load_store(path: &Path) -> Store {
    match load_required(path) {
        Ok(store) => store,
        Err(LoadError::SourceUnavailable { source, .. }) => {
            if source.kind() == io::ErrorKind::NotFound {
                tracing::debug!("Optional secrets file {} not found, skipping", path.display());
            } else {
                tracing::warn!("Skipping unreadable secrets file {}: {}", path.display(), source);
            }
            Store::default()
        }
        Err(LoadError::MalformedSource { source, .. }) => {
            tracing::warn!("Skipping malformed secrets file {}: {}", path.display(), source);
            Store::default()
        }
    }
}

pub fn load_source(spec: &SourceSpec) -> Result<Store, LoadError> {
    if spec.required {
        load_required(&spec.path)
    } else {
        Ok(load_store(&spec.path))
    }
}
