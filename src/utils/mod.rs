//! Shared helpers

pub mod paths;

pub use paths::{expand_home, home_dir};
