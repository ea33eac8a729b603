//! Configuration types for the DigitalOcean API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with DigitalOcean.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DigitalOceanConfig`]: The main configuration struct holding all SDK settings
//! - [`DigitalOceanConfigBuilder`]: A builder for constructing [`DigitalOceanConfig`] instances
//! - [`AuthToken`]: A validated API token newtype with masked debug output
//! - [`ApiHost`]: A validated API host URL
//! - [`ApiVersion`]: The DigitalOcean API version to use
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::{AuthToken, DigitalOceanConfig};
//!
//! let config = DigitalOceanConfig::builder()
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_page_size(), 25);
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiHost, AuthToken};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Page size used for GET requests that do not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Configuration for the DigitalOcean API SDK.
///
/// Holds the credentials and endpoint settings shared by every call made
/// through one [`DigitalOceanClient`](crate::DigitalOceanClient). A config is
/// built once and never mutated; building another config yields a fully
/// independent client.
///
/// # Thread Safety
///
/// `DigitalOceanConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::{ApiHost, AuthToken, DigitalOceanConfig};
///
/// let config = DigitalOceanConfig::builder()
///     .auth_token(AuthToken::new("token").unwrap())
///     .api_host(ApiHost::new("http://localhost:8080").unwrap())
///     .default_page_size(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_host().host_name(), "localhost");
/// ```
#[derive(Clone, Debug)]
pub struct DigitalOceanConfig {
    auth_token: AuthToken,
    api_version: ApiVersion,
    api_host: ApiHost,
    default_page_size: u32,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl DigitalOceanConfig {
    /// Creates a new builder for constructing a `DigitalOceanConfig`.
    #[must_use]
    pub fn builder() -> DigitalOceanConfigBuilder {
        DigitalOceanConfigBuilder::new()
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the page size applied to GET requests without one.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify DigitalOceanConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigitalOceanConfig>();
};

/// Builder for constructing [`DigitalOceanConfig`] instances.
///
/// The only required field is `auth_token`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V2`]
/// - `api_host`: `https://api.digitalocean.com`
/// - `default_page_size`: [`DEFAULT_PAGE_SIZE`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport's own default)
#[derive(Debug, Default)]
pub struct DigitalOceanConfigBuilder {
    auth_token: Option<AuthToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<ApiHost>,
    default_page_size: Option<u32>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl DigitalOceanConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the page size used for GET requests that do not specify one.
    #[must_use]
    pub const fn default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = Some(size);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the transport timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`DigitalOceanConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth_token` is not set,
    /// or [`ConfigError::InvalidPageSize`] if the default page size is zero.
    pub fn build(self) -> Result<DigitalOceanConfig, ConfigError> {
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let default_page_size = self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if default_page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                size: default_page_size,
            });
        }

        Ok(DigitalOceanConfig {
            auth_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host.unwrap_or_default(),
            default_page_size,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
