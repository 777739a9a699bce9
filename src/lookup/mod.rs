//! Key lookup and listing over an effective store

use crate::decode::{decode, DecodeError};
use crate::domain::Store;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("unknown key: {0}")]
    KeyNotFound(String),

    #[error("cannot decode secret '{key}'")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },
}

/// Decoded value of the first entry whose key matches exactly.
pub fn fetch(store: &Store, key: &str) -> Result<String, FetchError> {
    let secret = store.get(key).ok_or_else(|| FetchError::KeyNotFound(key.to_string()))?;
    decode(secret).map_err(|source| FetchError::Decode { key: key.to_string(), source })
}

/// All keys in store order. Values are never exposed.
pub fn list_keys(store: &Store) -> Vec<&str> {
    store.iter().map(|s| s.key.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Encoding, Secret};
    use crate::store::{merge, parse_store};

    #[test]
    fn fetch_decodes_rot13_value() {
        let store =
            parse_store(br#"{"secrets":[{"key":"api","value":"abc","enc":"rot13"}]}"#).expect("parse");
        assert_eq!(fetch(&store, "api").expect("fetch"), "nop");
    }

    #[test]
    fn fetch_is_case_sensitive() {
        let store: Store = vec![Secret::new("Api", "v")].into_iter().collect();
        assert_eq!(fetch(&store, "api"), Err(FetchError::KeyNotFound("api".to_string())));
    }

    #[test]
    fn fetch_on_empty_store_is_key_not_found() {
        let err = fetch(&Store::default(), "missing").expect_err("empty");
        assert_eq!(err, FetchError::KeyNotFound("missing".to_string()));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn empty_lookup_key_never_matches_nonempty_keys() {
        let store: Store = vec![Secret::new("k", "v")].into_iter().collect();
        assert!(fetch(&store, "").is_err());
    }

    #[test]
    fn unknown_encoding_is_distinct_from_missing_key() {
        let store: Store = vec![Secret::new("k", "v").with_encoding(Encoding::from_tag("b64"))]
            .into_iter()
            .collect();
        let err = fetch(&store, "k").expect_err("decode failure");
        assert!(matches!(
            err,
            FetchError::Decode { source: DecodeError::UnknownEncoding(ref tag), .. } if tag == "b64"
        ));
    }

    #[test]
    fn fetch_after_merge_prefers_override() {
        let base: Store = vec![Secret::new("db", "x")].into_iter().collect();
        let overrides: Store =
            vec![Secret::new("db", "y"), Secret::new("new", "z")].into_iter().collect();
        let merged = merge(&base, &overrides);
        assert_eq!(fetch(&merged, "db").expect("db"), "y");
        assert_eq!(fetch(&merged, "new").expect("new"), "z");
    }

    #[test]
    fn fetch_after_blank_override_keeps_base() {
        let base = parse_store(br#"{"secrets":[{"key":"db","value":"x"}]}"#).expect("base");
        let overrides = parse_store(br#"{"secrets":[{"key":"db","value":""}]}"#).expect("override");
        assert_eq!(fetch(&merge(&base, &overrides), "db").expect("db"), "x");
    }

    #[test]
    fn list_keys_preserves_order() {
        let store: Store =
            vec![Secret::new("b", "1"), Secret::new("a", "2")].into_iter().collect();
        assert_eq!(list_keys(&store), vec!["b", "a"]);
    }

    #[test]
    fn list_keys_on_empty_store_is_empty() {
        assert!(list_keys(&Store::default()).is_empty());
    }
}
