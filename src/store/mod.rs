//! Secret stores: loading from JSON sources and merging them
//!
//! Sources are folded in order (system-wide first, then user files), with
//! later sources overriding earlier ones.

use crate::config::Settings;
use crate::domain::Store;

pub mod loader;
pub mod merge;

pub use loader::{load_required, load_source, load_store, parse_store, LoadError};
pub use merge::{merge, merge_all};

/// Load every configured source and merge them into the effective store.
///
/// Stops at the first required source that fails; optional sources that
/// fail contribute nothing.
pub fn load_effective(settings: &Settings) -> Result<Store, LoadError> {
    let stores = settings.sources.iter().map(load_source).collect::<Result<Vec<_>, _>>()?;
    Ok(merge_all(stores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceSpec;
    use crate::lookup::fetch;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn user_file_overrides_system_file() {
        let tmp = TempDir::new().expect("tmp");
        let system = tmp.path().join("system.json");
        let user = tmp.path().join("user.json");
        fs::write(&system, r#"{"secrets":[{"key":"db","value":"root"},{"key":"api","value":"sys"}]}"#)
            .expect("write system");
        fs::write(&user, r#"{"secrets":[{"key":"db","value":"mine"},{"key":"api","value":""}]}"#)
            .expect("write user");

        let settings =
            Settings { sources: vec![SourceSpec::optional(system), SourceSpec::required(user)] };
        let store = load_effective(&settings).expect("load");
        assert_eq!(fetch(&store, "db").expect("db"), "mine");
        assert_eq!(fetch(&store, "api").expect("api"), "sys");
    }

    #[test]
    fn missing_system_file_is_ignored() {
        let tmp = TempDir::new().expect("tmp");
        let user = tmp.path().join("user.json");
        fs::write(&user, r#"{"secrets":[{"key":"token","value":"t"}]}"#).expect("write user");

        let settings = Settings {
            sources: vec![
                SourceSpec::optional(tmp.path().join("no-such-system.json")),
                SourceSpec::optional(user),
            ],
        };
        let store = load_effective(&settings).expect("load");
        assert_eq!(fetch(&store, "token").expect("token"), "t");
    }

    #[test]
    fn failing_required_source_aborts() {
        let tmp = TempDir::new().expect("tmp");
        let settings =
            Settings { sources: vec![SourceSpec::required(tmp.path().join("missing.json"))] };
        assert!(load_effective(&settings).is_err());
    }
}
