//! String helpers.

use crate::error::UtilError;

/// Concatenate strings into one allocation.
///
/// Returns an empty string for empty input.
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::concat;
///
/// assert_eq!(concat(&["this ", "is ", "my ", "string"]), "this is my string");
/// assert_eq!(concat(&[]), "");
/// ```
pub fn concat(parts: &[&str]) -> String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = String::with_capacity(len);
    for part in parts {
        out.push_str(part);
    }
    out
}

/// Report whether `substr` occurs in `s`, ignoring case.
///
/// Returns `false` if either string is empty.
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::contains_case_insensitive;
///
/// assert!(contains_case_insensitive("Hello, World", "WORLD"));
/// assert!(!contains_case_insensitive("Hello", ""));
/// ```
pub fn contains_case_insensitive(s: &str, substr: &str) -> bool {
    if s.is_empty() || substr.is_empty() {
        return false;
    }

    s.to_lowercase().contains(&substr.to_lowercase())
}

/// View a string as bytes.
///
/// # Errors
///
/// Returns [`UtilError::EmptyString`] for an empty string.
pub fn to_bytes(s: &str) -> Result<&[u8], UtilError> {
    if s.is_empty() {
        return Err(UtilError::EmptyString);
    }

    Ok(s.as_bytes())
}

/// View bytes as a string, checking they are valid UTF-8.
///
/// # Errors
///
/// Returns [`UtilError::InvalidUtf8`] if they are not.
pub fn to_str(bytes: &[u8]) -> Result<&str, UtilError> {
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat() {
        assert_eq!(concat(&["a", "", "bc"]), "abc");
        assert_eq!(concat(&["only"]), "only");
        assert_eq!(concat(&[]), "");
    }

    #[test]
    fn test_contains_case_insensitive() {
        assert!(contains_case_insensitive("my STRING", "string"));
        assert!(!contains_case_insensitive("my string", "other"));
        assert!(!contains_case_insensitive("", "a"));
        assert!(!contains_case_insensitive("a", ""));
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(to_bytes("this is my string").unwrap(), b"this is my string");
        assert!(matches!(to_bytes(""), Err(UtilError::EmptyString)));
    }

    #[test]
    fn test_to_str() {
        assert_eq!(to_str(b"this is my string").unwrap(), "this is my string");
        assert_eq!(to_str(b"").unwrap(), "");
        assert!(matches!(
            to_str(&[0xff, 0xfe]),
            Err(UtilError::InvalidUtf8(_))
        ));
    }
}
