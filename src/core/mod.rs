//! Core configuration loading.

mod loader;

pub use loader::{ConfigLoader, parse_file, parse_file_with_env};
