//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated DigitalOcean API token.
///
/// This newtype ensures the token is not blank and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::AuthToken;
///
/// let token = AuthToken::new("dop_v1_secret").unwrap();
/// assert_eq!(token.as_ref(), "dop_v1_secret");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty or only
    /// whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated API host URL.
///
/// Holds the scheme, host and optional port the engine sends requests to.
/// Any path, query or fragment in the input is discarded; the API version
/// and resource path are appended per request.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::ApiHost;
///
/// let host = ApiHost::default();
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), "api.digitalocean.com");
///
/// let local = ApiHost::new("http://127.0.0.1:8080").unwrap();
/// assert_eq!(local.port(), Some(8080));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: Url,
}

impl ApiHost {
    /// The production DigitalOcean API endpoint.
    pub const DEFAULT: &'static str = "https://api.digitalocean.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let invalid = || ConfigError::InvalidApiHost { url: raw.clone() };

        let mut url = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }

        url.set_path("");
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self { url })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Returns the explicit port, if one was given.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Returns the base URL with an empty path.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.url
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Url::parse(Self::DEFAULT).expect("default API host is a valid URL"),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        self.url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_rejects_blank_strings() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
        assert!(matches!(
            AuthToken::new(" \t"),
            Err(ConfigError::EmptyAuthToken)
        ));
    }

    #[test]
    fn test_auth_token_masks_value_in_debug() {
        let token = AuthToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AuthToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_auth_token_bearer_header() {
        let token = AuthToken::new("abc123").unwrap();
        assert_eq!(token.bearer(), "Bearer abc123");
    }

    #[test]
    fn test_api_host_defaults_to_production() {
        let host = ApiHost::default();
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "api.digitalocean.com");
        assert_eq!(host.port(), None);
    }

    #[test]
    fn test_api_host_accepts_local_mock_servers() {
        let host = ApiHost::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(host.scheme(), "http");
        assert_eq!(host.host_name(), "127.0.0.1");
        assert_eq!(host.port(), Some(3000));
    }

    #[test]
    fn test_api_host_drops_path_and_query() {
        let host = ApiHost::new("https://proxy.example.com/some/path?x=1").unwrap();
        assert_eq!(host.as_url().path(), "/");
        assert!(host.as_url().query().is_none());
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        assert!(ApiHost::new("api.digitalocean.com").is_err());
        assert!(ApiHost::new("ftp://api.digitalocean.com").is_err());
        assert!(ApiHost::new("https://").is_err());
        assert!(ApiHost::new("").is_err());
    }
}
