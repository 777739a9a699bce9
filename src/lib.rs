//! secret-fetcher: look up named secrets in layered local JSON files
//!
//! A system-wide file and a user file are loaded, merged with the user's
//! entries taking precedence, and queried for a single key or a key listing.
//! Values may be stored plain or rot13-obfuscated.

pub mod cli;
pub mod config;
pub mod decode;
pub mod domain;
pub mod lookup;
pub mod store;
pub mod utils;

pub use decode::{decode, DecodeError};
pub use domain::{Encoding, Secret, Store};
pub use lookup::{fetch, list_keys, FetchError};
pub use store::{load_effective, merge, merge_all, LoadError};
