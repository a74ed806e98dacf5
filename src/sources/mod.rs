//! Payload and overlay source implementations.

mod config_source;
mod env;
mod file;
mod location;
#[cfg(feature = "remote")]
mod remote;

pub use config_source::PayloadSource;
pub use env::{EnvProvider, EnvSource, ProcessEnv};
pub use file::FileSource;
pub use location::Location;
#[cfg(feature = "remote")]
pub use remote::HttpSource;
