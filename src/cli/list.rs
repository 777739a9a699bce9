//! List command implementation

use anyhow::Result;
use std::io::{self, Write};

use crate::config::Settings;
use crate::lookup::list_keys;
use crate::store::load_effective;

pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let store = load_effective(settings)?;
    let keys = list_keys(&store);

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&keys)?)?;
        return Ok(());
    }

    if keys.is_empty() {
        eprintln!("no secrets found");
        return Ok(());
    }

    for key in keys {
        writeln!(stdout, "{}", key)?;
    }
    Ok(())
}
