//! Fetch command implementation

use anyhow::Result;
use std::io::{self, Write};

use crate::config::Settings;
use crate::lookup::fetch;
use crate::store::load_effective;

pub fn run(settings: &Settings, key: &str) -> Result<()> {
    let store = load_effective(settings)?;
    tracing::debug!("Looking up '{}' among {} secrets", key, store.len());

    let value = fetch(&store, key)?;

    // The value alone, for use in scripts and pipelines.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    stdout.flush()?;
    Ok(())
}
