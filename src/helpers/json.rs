//! JSON marshalling.

use crate::error::UtilError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize `value` to JSON bytes.
///
/// # Errors
///
/// Returns [`UtilError::Json`] if `value` cannot be represented as JSON.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, UtilError> {
    Ok(serde_json::to_vec(value)?)
}

/// Deserialize JSON bytes into a `T`.
///
/// # Errors
///
/// Returns [`UtilError::Json`] if `data` is not valid JSON for `T`.
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::unmarshal;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: u64,
///     email: String,
/// }
///
/// let user: User = unmarshal(br#"{"id": 1, "email": "mail@example.com"}"#)?;
/// assert_eq!(user.email, "mail@example.com");
/// # Ok::<(), handykit::error::UtilError>(())
/// ```
pub fn unmarshal<T: DeserializeOwned>(data: &[u8]) -> Result<T, UtilError> {
    Ok(serde_json::from_slice(data)?)
}
