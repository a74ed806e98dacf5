//! Error types for handykit.

use crate::formats::Format;

/// Result type alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
///
/// Each variant corresponds to one stage of the loader and carries the
/// location (path or URL) it failed on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The location string was empty.
    #[error("Configuration location is empty")]
    EmptyLocation,

    /// The location's extension does not map to a supported format.
    #[error(
        "Unrecognized configuration format for '{location}' (supported: .json, .yaml, .yml, .toml, .tf)"
    )]
    UnrecognizedFormat {
        /// The rejected location
        location: String,
    },

    /// The location could not be interpreted as a path or URL.
    #[error("Invalid configuration location '{location}': {reason}")]
    InvalidLocation {
        /// The rejected location
        location: String,
        /// Why it was rejected
        reason: String,
    },

    /// A local location points at a directory.
    #[error("Configuration path is a directory: {path}")]
    LocationIsDirectory {
        /// The offending path
        path: String,
    },

    /// A local location does not exist.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// The missing path
        path: String,
    },

    /// A local file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    ReadFailed {
        /// The unreadable path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request failed or returned a non-success status.
    #[error("Failed to fetch configuration from '{url}': {reason}")]
    FetchFailed {
        /// The requested URL
        url: String,
        /// Transport or status error
        reason: String,
    },

    /// The HTTP response body could not be read.
    #[error("Invalid response body from '{url}': {reason}")]
    InvalidBody {
        /// The requested URL
        url: String,
        /// Body read error
        reason: String,
    },

    /// The location uses a scheme other than file, http or https.
    #[error("Unsupported scheme '{scheme}' in '{location}', use a file path or an http(s) URL")]
    UnsupportedScheme {
        /// The rejected location
        location: String,
        /// The scheme found
        scheme: String,
    },

    /// The payload is not valid for its format.
    #[error("Malformed {format} payload from '{location}': {reason}")]
    MalformedPayload {
        /// Format the payload was parsed as
        format: Format,
        /// Where the payload came from
        location: String,
        /// Parser error
        reason: String,
    },

    /// Environment overrides could not be merged into the file values.
    #[error("Failed to merge environment variables: {0}")]
    EnvMergeFailed(String),

    /// The merged values do not fit the target type.
    #[error("Failed to deserialize configuration: {0}")]
    UnmarshalFailed(String),

    /// Attempted to use a feature that is not enabled.
    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(&'static str),
}

/// Errors returned by the helper functions in [`crate::helpers`].
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// An empty string was given where content is required.
    #[error("can't convert empty string to byte slice")]
    EmptyString,

    /// Bytes were not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A zero size was requested.
    #[error("can't generate random string with zero size")]
    ZeroSize,

    /// The operating system RNG failed.
    #[error("random source failed: {0}")]
    Entropy(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
