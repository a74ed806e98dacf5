//! Environment variable overlay source.

use crate::error::{ConfigError, Result};
use config::{Environment, Source};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Access to a set of environment variables.
///
/// The loader reads variables through this trait so that callers (and tests)
/// can supply a fixed set instead of the real process environment.
///
/// # Examples
///
/// ```rust
/// use handykit::sources::EnvProvider;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("APP_PORT".to_string(), "9090".to_string())]);
/// assert_eq!(vars.vars().len(), 1);
/// ```
pub trait EnvProvider {
    /// All variables as `(name, value)` pairs.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
///
/// Variables whose name or value is not valid unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl<S: BuildHasher> EnvProvider for HashMap<String, String, S> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl EnvProvider for Vec<(String, String)> {
    fn vars(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

impl<P: EnvProvider + ?Sized> EnvProvider for &P {
    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// Environment variable overlay source.
///
/// Selects variables named `<PREFIX>_<KEY>` through `config`'s
/// [`Environment`] source and turns each into a dotted configuration key: the
/// prefix is stripped, the rest is lowercased and every `_` becomes `.`. The
/// prefix matches regardless of case. Values stay strings; they are converted
/// to the target field's type on deserialization.
///
/// # Examples
///
/// ```rust
/// use handykit::sources::EnvSource;
///
/// // MY_APP_DATABASE_URL -> database.url
/// let env = vec![("MY_APP_DATABASE_URL".to_string(), "postgres://db".to_string())];
/// let overlay = EnvSource::new("MY_APP").overlay(&env)?;
/// assert_eq!(overlay[0].0, "database.url");
/// # Ok::<(), handykit::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Create a new environment variable source for `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Collect the overlay from `env`, sorted by key.
    ///
    /// Variables with nothing after the prefix are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvMergeFailed`] if the variables cannot be
    /// collected.
    pub fn overlay<P: EnvProvider + ?Sized>(&self, env: &P) -> Result<Vec<(String, config::Value)>> {
        let vars: config::Map<String, String> = env.vars().into_iter().collect();

        let environment = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator("_")
            .source(Some(vars));

        let mut entries: Vec<_> = environment
            .collect()
            .map_err(|e| ConfigError::EnvMergeFailed(format!("Failed to read {}: {}", self.name(), e)))?
            .into_iter()
            .filter(|(key, _)| !key.is_empty())
            .collect();

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    /// Get a human-readable name for this source (for logging/debugging).
    pub fn name(&self) -> String {
        format!("env:{}_*", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn overlay(prefix: &str, env: &[(&str, &str)]) -> Vec<(String, String)> {
        EnvSource::new(prefix)
            .overlay(&vars(env))
            .unwrap()
            .into_iter()
            .map(|(key, value)| (key, value.into_string().unwrap()))
            .collect()
    }

    #[test]
    fn test_overlay_keys() {
        assert_eq!(
            overlay("MY_CONFIG", &[("MY_CONFIG_TOKEN", "t"), ("MY_CONFIG_SERVER_PORT", "1")]),
            vars(&[("server.port", "1"), ("token", "t")])
        );
    }

    #[test]
    fn test_overlay_requires_separator() {
        let env = [("APPLICATION_NAME", "x"), ("APP", "x"), ("APP_", "x")];
        assert!(overlay("APP", &env).is_empty());
    }

    #[test]
    fn test_overlay_prefix_ignores_case() {
        assert_eq!(overlay("APP", &[("app_port", "1")]), vars(&[("port", "1")]));
    }

    #[test]
    fn test_overlay_filters_and_sorts() {
        let env = [
            ("APP_URL", "https://example.com"),
            ("HOME", "/root"),
            ("APP_AUTH_TOKEN", "secret"),
        ];

        assert_eq!(
            overlay("APP", &env),
            vars(&[("auth.token", "secret"), ("url", "https://example.com")])
        );
    }

    #[test]
    fn test_overlay_keeps_odd_names() {
        let env = [("APP_FOO__BAR", "x"), ("APP_A:B", "y")];
        assert_eq!(
            overlay("APP", &env),
            vars(&[("a:b", "y"), ("foo..bar", "x")])
        );
    }

    #[test]
    fn test_overlay_from_map() {
        let env = HashMap::from([("APP_PORT".to_string(), "9090".to_string())]);
        let overlay = EnvSource::new("APP").overlay(&env).unwrap();
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].0, "port");
        assert_eq!(overlay[0].1.clone().into_string().unwrap(), "9090");
    }

    #[test]
    fn test_name() {
        let source = EnvSource::new("APP");
        assert_eq!(source.name(), "env:APP_*");
    }
}
