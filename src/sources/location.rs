//! Classification of configuration locations.

use crate::error::{ConfigError, Result};
use std::path::PathBuf;
use url::Url;

/// Where a configuration payload lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path on the local filesystem (bare path or `file://` URL).
    Local(PathBuf),
    /// An `http` or `https` URL.
    Remote(Url),
}

impl Location {
    /// Classify a location string.
    ///
    /// Strings without a scheme are local paths, as are single-letter
    /// schemes (Windows drive letters such as `C:\app.json`).
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidLocation`] if the string is a malformed URL, or a
    ///   `file` URL that does not name a local path
    /// - [`ConfigError::UnsupportedScheme`] for schemes other than `file`,
    ///   `http` and `https`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use handykit::sources::Location;
    ///
    /// assert!(matches!(Location::parse("./config.json")?, Location::Local(_)));
    /// assert!(matches!(Location::parse("https://example.com/app.yaml")?, Location::Remote(_)));
    /// assert!(Location::parse("ftp://example.com/app.yaml").is_err());
    /// # Ok::<(), handykit::error::ConfigError>(())
    /// ```
    pub fn parse(location: &str) -> Result<Self> {
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Ok(Self::Local(PathBuf::from(location)));
            }
            Err(e) => {
                return Err(ConfigError::InvalidLocation {
                    location: location.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        match url.scheme() {
            "file" => url
                .to_file_path()
                .map(Self::Local)
                .map_err(|()| ConfigError::InvalidLocation {
                    location: location.to_string(),
                    reason: "file URL does not name a local path".to_string(),
                }),
            "http" | "https" => Ok(Self::Remote(url)),
            scheme if scheme.len() == 1 => Ok(Self::Local(PathBuf::from(location))),
            scheme => Err(ConfigError::UnsupportedScheme {
                location: location.to_string(),
                scheme: scheme.to_string(),
            }),
        }
    }
}
