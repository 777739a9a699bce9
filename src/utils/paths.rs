//! Home directory discovery and `~` expansion

use std::path::{Path, PathBuf};

/// Current user's home directory: `$HOME` first, then the platform's user
/// database (passwd on Unix, the profile folder on Windows).
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().filter(|p| !p.as_os_str().is_empty())
}

/// Replace a leading `~` component with `home`. Paths are returned unchanged
/// when they don't start with `~` or no home directory is known.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
