//! Payload source trait.

use crate::error::Result;

/// Trait for places a raw configuration payload can be read from.
///
/// Implement this trait to fetch payloads from somewhere other than the local
/// filesystem or plain HTTP. A source is read once per load; it does no
/// caching and no retries.
pub trait PayloadSource: Send + Sync {
    /// Read the whole payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be located or read.
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}
