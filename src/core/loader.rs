//! Configuration loader: fetch, parse, overlay, deserialize.

use crate::error::{ConfigError, Result};
use crate::formats::{Format, Tree};
use crate::sources::{EnvProvider, EnvSource, FileSource, Location, PayloadSource, ProcessEnv};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

/// Loads a structured file and overlays environment variables on top of it.
///
/// The loader keeps no state between calls: every [`load`](Self::load) reads
/// its location again. It is generic over the [`EnvProvider`] it reads
/// variables from, which defaults to the process environment.
///
/// # Examples
///
/// ```rust,no_run
/// use handykit::core::ConfigLoader;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct AppConfig {
///     url: String,
///     token: String,
/// }
///
/// # fn example() -> handykit::error::Result<()> {
/// // MY_APP_TOKEN=secret overrides the file's `token`
/// let config: AppConfig = ConfigLoader::new().load("config/app.yaml", "MY_APP")?;
/// println!("{}", config.url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader<E = ProcessEnv> {
    env: E,
    #[cfg(feature = "remote")]
    client: Option<reqwest::blocking::Client>,
}

impl ConfigLoader {
    /// Create a loader reading the process environment.
    pub fn new() -> Self {
        Self {
            env: ProcessEnv,
            #[cfg(feature = "remote")]
            client: None,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvProvider> ConfigLoader<E> {
    /// Read environment overrides from `env` instead of the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use handykit::core::ConfigLoader;
    /// use std::collections::HashMap;
    ///
    /// let env = HashMap::from([("APP_PORT".to_string(), "9090".to_string())]);
    /// let loader = ConfigLoader::new().with_env(env);
    /// ```
    pub fn with_env<P: EnvProvider>(self, env: P) -> ConfigLoader<P> {
        ConfigLoader {
            env,
            #[cfg(feature = "remote")]
            client: self.client,
        }
    }

    /// Reuse `client` for remote locations.
    ///
    /// Without one, a default client is built for each remote load.
    #[cfg(feature = "remote")]
    pub fn with_http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Load the configuration at `location` into a `T`.
    ///
    /// `location` is a local path, a `file://` URL or an `http(s)` URL; its
    /// extension selects the format. When `env_prefix` is non-empty, variables
    /// named `<env_prefix>_<KEY>` override the file's values (see
    /// [`EnvSource`]). An empty prefix leaves the environment untouched.
    ///
    /// # Errors
    ///
    /// Fails at the first stage that goes wrong; see [`ConfigError`] for the
    /// variant raised by each stage.
    pub fn load<T>(&self, location: &str, env_prefix: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if location.is_empty() {
            return Err(ConfigError::EmptyLocation);
        }

        let format =
            Format::from_location(location).ok_or_else(|| ConfigError::UnrecognizedFormat {
                location: location.to_string(),
            })?;
        debug!(location, %format, "loading configuration");

        let payload = self.fetch(location)?;

        let mut tree = format
            .parser()
            .parse(&payload)
            .map_err(|reason| ConfigError::MalformedPayload {
                format,
                location: location.to_string(),
                reason,
            })?;
        trace!(location, keys = tree.len(), "parsed payload");

        if !env_prefix.is_empty() {
            let env_source = EnvSource::new(env_prefix);
            let overlay = env_source.overlay(&self.env)?;
            debug!(
                source = %env_source.name(),
                overrides = overlay.len(),
                "applying environment overlay"
            );

            for (key, value) in overlay {
                apply_override(&mut tree, &key, value)?;
            }
        }

        config::Value::new(None, config::ValueKind::Table(tree))
            .try_deserialize::<T>()
            .map_err(|e| ConfigError::UnmarshalFailed(e.to_string()))
    }

    /// Load into an existing value.
    ///
    /// `target` is only assigned once loading has fully succeeded; on error it
    /// is left as it was.
    pub fn load_into<T>(&self, location: &str, env_prefix: &str, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        *target = self.load(location, env_prefix)?;
        Ok(())
    }

    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let source: Box<dyn PayloadSource> = match Location::parse(location)? {
            Location::Local(path) => Box::new(FileSource::new(path)),
            Location::Remote(url) => self.remote_source(url)?,
        };

        trace!(source = %source.name(), "fetching payload");
        source.fetch()
    }

    #[cfg(feature = "remote")]
    fn remote_source(&self, url: Url) -> Result<Box<dyn PayloadSource>> {
        use crate::sources::HttpSource;

        let source = match &self.client {
            Some(client) => HttpSource::new(url, client.clone()),
            None => HttpSource::with_default_client(url)?,
        };
        Ok(Box::new(source))
    }

    #[cfg(not(feature = "remote"))]
    fn remote_source(&self, _url: Url) -> Result<Box<dyn PayloadSource>> {
        Err(ConfigError::FeatureNotEnabled("remote"))
    }
}

/// Set the dotted `key` in `tree` to `value`.
///
/// Each segment reuses an existing key that differs only in ASCII case, so
/// `APP_SERVERURL` lands on a file's `serverUrl`. Keys with an empty segment
/// are stored as a single literal key at the root.
fn apply_override(tree: &mut Tree, key: &str, value: config::Value) -> Result<()> {
    let segments: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        tree.insert(key.to_string(), value);
        return Ok(());
    }

    let mut table = tree;
    for (depth, segment) in parents.iter().enumerate() {
        let name = matching_key(table, segment);
        let entry = table
            .entry(name)
            .or_insert_with(|| config::Value::new(None, config::ValueKind::Table(Tree::new())));

        table = match &mut entry.kind {
            config::ValueKind::Table(inner) => inner,
            _ => {
                return Err(ConfigError::EnvMergeFailed(format!(
                    "Failed to merge '{}': '{}' is not a table",
                    key,
                    segments[..=depth].join(".")
                )));
            }
        };
    }

    let name = matching_key(table, last);
    trace!(key = %name, "overriding value");
    table.insert(name, value);
    Ok(())
}

fn matching_key(table: &Tree, segment: &str) -> String {
    table
        .keys()
        .find(|key| key.eq_ignore_ascii_case(segment))
        .cloned()
        .unwrap_or_else(|| segment.to_string())
}

/// Load `location` into a `T` without environment overrides.
///
/// Shorthand for `ConfigLoader::new().load(location, "")`.
///
/// # Examples
///
/// ```rust,no_run
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// # fn example() -> handykit::error::Result<()> {
/// let server: Server = handykit::parse_file("https://example.com/server.toml")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_file<T>(location: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    ConfigLoader::new().load(location, "")
}

/// Load `location` into a `T`, letting `<env_prefix>_*` variables from the
/// process environment override file values.
///
/// Shorthand for `ConfigLoader::new().load(location, env_prefix)`.
pub fn parse_file_with_env<T>(location: &str, env_prefix: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    ConfigLoader::new().load(location, env_prefix)
}
