//! Override-wins merging of secret stores

use crate::domain::{Secret, Store};

/// Combine `base` with `overrides`, producing a new store.
///
/// - A key in both takes the override's whole entry (value and encoding),
///   unless the override's value is empty: a blank never clobbers.
/// - Keys only in `overrides` are appended in their original order.
/// - Keys only in `base` are kept unchanged and in place.
///
/// Within each input the first entry for a key is the one that counts, so the
/// result never holds two entries with the same key.
pub fn merge(base: &Store, overrides: &Store) -> Store {
    let mut merged: Vec<Secret> = Vec::with_capacity(base.len() + overrides.len());

    for secret in base {
        if !merged.iter().any(|s| s.key == secret.key) {
            merged.push(secret.clone());
        }
    }
    let base_len = merged.len();

    let mut seen: Vec<&str> = Vec::with_capacity(overrides.len());
    for secret in overrides {
        if seen.contains(&secret.key.as_str()) {
            continue;
        }
        seen.push(&secret.key);

        match merged[..base_len].iter().position(|s| s.key == secret.key) {
            Some(idx) => {
                if !secret.value.is_empty() {
                    merged[idx] = secret.clone();
                }
            }
            None => merged.push(secret.clone()),
        }
    }

    Store::new(merged)
}

/// Fold an ordered sequence of stores, lowest precedence first.
pub fn merge_all<I>(stores: I) -> Store
where
    I: IntoIterator<Item = Store>,
{
    stores.into_iter().fold(Store::default(), |acc, next| {
        let merged = merge(&acc, &next);
        tracing::debug!(
            "Merged {} secrets over {} ({} effective)",
            next.len(),
            acc.len(),
            merged.len()
        );
        merged
    })
}
