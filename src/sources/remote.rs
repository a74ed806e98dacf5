//! Remote HTTP/HTTPS payload source.

use super::PayloadSource;
use crate::error::{ConfigError, Result};
use reqwest::blocking::Client;
use url::Url;

/// Fetches a payload with a single blocking HTTP GET.
///
/// There is no timeout beyond the client's own and no retry. A non-success
/// status is reported as a fetch failure.
///
/// # Examples
///
/// ```rust,no_run
/// use handykit::sources::{HttpSource, PayloadSource};
/// use reqwest::blocking::Client;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = Url::parse("https://config.example.com/app.yaml")?;
/// let source = HttpSource::new(url, Client::new());
/// let bytes = source.fetch()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source for `url` using `client`.
    pub fn new(url: Url, client: Client) -> Self {
        Self { url, client }
    }

    /// Create a source with a freshly built default client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FetchFailed`] if the HTTP client cannot be
    /// constructed.
    pub fn with_default_client(url: Url) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::FetchFailed {
                url: url.to_string(),
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self::new(url, client))
    }
}

impl PayloadSource for HttpSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| ConfigError::FetchFailed {
                url: self.url.to_string(),
                reason: format!("HTTP request failed: {}", e),
            })?;

        // Check status code
        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::FetchFailed {
                url: self.url.to_string(),
                reason: format!(
                    "HTTP request failed with status {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let body = response.bytes().map_err(|e| ConfigError::InvalidBody {
            url: self.url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(body.to_vec())
    }

    fn name(&self) -> String {
        format!("http:{}", self.url)
    }
}
