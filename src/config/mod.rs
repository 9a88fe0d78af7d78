//! Configuration types for the Twitter REST client.
//!
//! # Overview
//!
//! - [`TwitterConfig`]: where requests go and how the client identifies itself
//! - [`TwitterConfigBuilder`]: a builder for [`TwitterConfig`]
//! - [`AccessToken`]: a validated token with masked debug output
//! - [`HostUrl`]: a validated API host URL
//! - [`ApiVersion`]: the REST API version (the base path segment)
//!
//! # Example
//!
//! ```rust
//! use twitter_api::{ApiVersion, HostUrl, TwitterConfig};
//!
//! let config = TwitterConfig::builder()
//!     .api_host(HostUrl::new("https://api.twitter.com").unwrap())
//!     .api_version(ApiVersion::V1)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.api_version().base_path(), "/1");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl};
pub use version::ApiVersion;

/// Default host of the Twitter REST API.
pub const DEFAULT_API_HOST: &str = "https://api.twitter.com";

/// Configuration for the Twitter REST client.
///
/// `TwitterConfig` is `Clone`, `Send` and `Sync`; one instance can back any
/// number of clients.
#[derive(Clone, Debug)]
pub struct TwitterConfig {
    api_host: HostUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl TwitterConfig {
    /// Creates a new builder for constructing a `TwitterConfig`.
    #[must_use]
    pub fn builder() -> TwitterConfigBuilder {
        TwitterConfigBuilder::new()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        TwitterConfigBuilder::new().build()
    }
}

// Verify TwitterConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwitterConfig>();
};

/// Builder for constructing [`TwitterConfig`] instances.
///
/// # Defaults
///
/// - `api_host`: [`DEFAULT_API_HOST`]
/// - `api_version`: [`ApiVersion::V1`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct TwitterConfigBuilder {
    api_host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl TwitterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host (useful for proxies and mock servers).
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TwitterConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> TwitterConfig {
        TwitterConfig {
            api_host: self.api_host.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TwitterConfig::builder().build();

        assert_eq!(config.api_host().as_ref(), DEFAULT_API_HOST);
        assert_eq!(config.api_version(), &ApiVersion::V1);
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.api_version().base_path(), "/1");
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = TwitterConfig::default();
        assert_eq!(config.api_host().origin(), "https://api.twitter.com");
        assert_eq!(config.api_version(), &ApiVersion::V1);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:9999").unwrap();
        let config = TwitterConfig::builder()
            .api_host(host.clone())
            .api_version(ApiVersion::V1_1)
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.api_host(), &host);
        assert_eq!(config.api_version(), &ApiVersion::V1_1);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.api_version().base_path(), "/1.1");
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = TwitterConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.api_version(), config.api_version());
        assert!(format!("{config:?}").contains("TwitterConfig"));
    }
}
