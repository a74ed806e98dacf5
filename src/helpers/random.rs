//! Random string generation.

use crate::error::UtilError;
use rand::RngCore;
use rand::rngs::OsRng;

/// Generate a random hex string of exactly `size` characters.
///
/// Bytes come from the operating system's secure random source.
///
/// # Errors
///
/// - [`UtilError::ZeroSize`] if `size` is zero
/// - [`UtilError::Entropy`] if the OS random source fails
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::random_string;
///
/// let token = random_string(8)?;
/// assert_eq!(token.len(), 8);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// # Ok::<(), handykit::error::UtilError>(())
/// ```
pub fn random_string(size: usize) -> Result<String, UtilError> {
    if size == 0 {
        return Err(UtilError::ZeroSize);
    }

    // Two hex characters per byte.
    let mut buffer = vec![0u8; size.div_ceil(2)];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| UtilError::Entropy(e.to_string()))?;

    let mut out = hex::encode(buffer);
    out.truncate(size);
    Ok(out)
}
