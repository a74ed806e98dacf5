//! File-based payload source.

use super::PayloadSource;
use crate::error::{ConfigError, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Reads a payload from the local filesystem.
///
/// # Examples
///
/// ```rust,no_run
/// use handykit::sources::{FileSource, PayloadSource};
///
/// let source = FileSource::new("config/default.yaml");
/// let bytes = source.fetch()?;
/// # Ok::<(), handykit::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }
}

impl PayloadSource for FileSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound {
                    path: self.display(),
                });
            }
            Err(e) => {
                return Err(ConfigError::ReadFailed {
                    path: self.display(),
                    source: e,
                });
            }
        };

        if metadata.is_dir() {
            return Err(ConfigError::LocationIsDirectory {
                path: self.display(),
            });
        }

        fs::read(&self.path).map_err(|e| ConfigError::ReadFailed {
            path: self.display(),
            source: e,
        })
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
