//! Decoding of stored secret values

use crate::domain::{Encoding, Secret};
use thiserror::Error;

pub mod rot13;

pub use rot13::rot13;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),
}

impl Encoding {
    /// Turn a raw stored value into its plain form.
    pub fn decode(&self, raw: &str) -> Result<String, DecodeError> {
        match self {
            Encoding::Plain => Ok(raw.to_string()),
            Encoding::Rot13 => Ok(rot13(raw)),
            Encoding::Unknown(tag) => Err(DecodeError::UnknownEncoding(tag.clone())),
        }
    }
}

pub fn decode(secret: &Secret) -> Result<String, DecodeError> {
    secret.encoding.decode(&secret.value)
}
