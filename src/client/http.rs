//! HTTP client abstraction for clustering server requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::ClusterError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout. Clustering can run for minutes, so none by default.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Create config from an optional timeout in seconds
    #[must_use]
    pub fn from_secs(secs: Option<u64>) -> Self {
        Self {
            timeout: secs.map(Duration::from_secs),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper.
///
/// The inner client keeps a cookie jar so the session established by
/// `/logIn` is sent with every later request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::ClientInit`] if the TLS backend or cookie
    /// store cannot be initialized.
    pub fn with_config(config: HttpConfig) -> Result<Self, ClusterError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| ClusterError::ClientInit(e.to_string()))?;
        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.get(url).header("accept", "application/json")
    }

    /// Build a POST request with standard headers
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.post(url).header("accept", "application/json")
    }
}
