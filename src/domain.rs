//! Core data types: secrets, their encodings, and stores of secrets.

use serde::Deserialize;
use std::fmt;

/// How a stored value is encoded on disk.
///
/// Tags are matched case-insensitively. An empty or absent tag means
/// [`Encoding::Plain`]. Anything unrecognised is kept verbatim in
/// [`Encoding::Unknown`] so that decoding can report the offending tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Encoding {
    #[default]
    Plain,
    Rot13,
    Unknown(String),
}

impl Encoding {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "" | "plain" => Encoding::Plain,
            "rot13" => Encoding::Rot13,
            _ => Encoding::Unknown(tag.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Encoding::Plain => "plain",
            Encoding::Rot13 => "rot13",
            Encoding::Unknown(tag) => tag,
        }
    }
}

impl From<Option<String>> for Encoding {
    fn from(tag: Option<String>) -> Self {
        tag.map(|t| Encoding::from_tag(&t)).unwrap_or_default()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single named secret as read from a source file.
///
/// Older files name the key field `name` and the encoding field `encoding`;
/// both spellings are accepted.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Secret {
    #[serde(default, alias = "name")]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "enc", alias = "encoding")]
    pub encoding: Encoding,
}

impl Secret {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into(), encoding: Encoding::Plain }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

// Values stay out of Debug output so a store can be traced safely.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .field("encoding", &self.encoding)
            .finish()
    }
}

/// An ordered collection of secrets loaded from one or more sources.
///
/// A store that failed to load is simply empty; there is no "absent" store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Store {
    #[serde(default)]
    secrets: Vec<Secret>,
}

impl Store {
    pub fn new(secrets: Vec<Secret>) -> Self {
        Self { secrets }
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Secret> {
        self.secrets.iter()
    }

    /// First entry whose key matches exactly.
    pub fn get(&self, key: &str) -> Option<&Secret> {
        self.secrets.iter().find(|s| s.key == key)
    }
}

impl FromIterator<Secret> for Store {
    fn from_iter<I: IntoIterator<Item = Secret>>(iter: I) -> Self {
        Self { secrets: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Secret;
    type IntoIter = std::slice::Iter<'a, Secret>;

    fn into_iter(self) -> Self::IntoIter {
        self.secrets.iter()
    }
}
