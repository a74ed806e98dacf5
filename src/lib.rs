//! # handykit
//!
//! Everyday helpers and a layered configuration loader.
//!
//! ## Overview
//!
//! The centrepiece is [`ConfigLoader`](core::ConfigLoader), which reads a
//! structured file and hands back a typed value:
//! - JSON, YAML, TOML or HCL, chosen by file extension
//! - from a local path or an `http(s)` URL
//! - with optional environment variable overrides (env wins over file)
//!
//! Alongside it, [`helpers`] collects small utilities: string concatenation,
//! case-insensitive search, membership tests, random strings, JSON
//! marshalling, in-place value substitution and styled terminal strings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct AppConfig {
//!     server_url: String,
//!     token: String,
//! }
//!
//! # fn example() -> handykit::error::Result<()> {
//! // MY_CONFIG_TOKEN=secret-1234567 overrides `token` from the file
//! let config: AppConfig =
//!     handykit::parse_file_with_env("https://example.com/config.yaml", "MY_CONFIG")?;
//! println!("Server: {}", config.server_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): load configuration over `http(s)`
//! - `styled` (default): [`helpers::render_styled`]

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod formats;
pub mod helpers;
pub mod sources;

pub use crate::core::{parse_file, parse_file_with_env};

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigLoader, parse_file, parse_file_with_env};
    pub use crate::error::{ConfigError, Result, UtilError};
    pub use crate::formats::Format;
    pub use crate::sources::EnvProvider;
}
