//! HTTP client for DigitalOcean API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the DigitalOcean API. Each call is a single round trip: no
//! retries, no caching.

use std::collections::HashMap;
use std::fmt;

use reqwest::Method;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestShape};
use crate::clients::http_response::HttpResponse;
use crate::config::DigitalOceanConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for making requests to the DigitalOcean API.
///
/// The client handles:
/// - Default headers including User-Agent, Content-Type and the bearer token
/// - Dispatch by [`RequestShape`], including DELETE requests with a body
/// - Status evaluation and rate-limit stitching
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use digitalocean_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let url = url::Url::parse("https://api.digitalocean.com/v2/account")?;
/// let text = client.execute(HttpRequest::builder(HttpMethod::Get, url).build()).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::TransportUnavailable`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &DigitalOceanConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}digitalocean-api-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Authorization".to_string(), config.auth_token().bearer());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the raw response.
    ///
    /// The response body is read to completion before returning, on every path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::TransportUnavailable`] on network or I/O failure.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!("HTTP Request:: {} {}", request.http_method, request.url);
        tracing::debug!("Request Headers:: {:?}", self.masked_headers());

        let url = request.url.clone();
        let req_builder = match request.shape() {
            RequestShape::Bodyless { method } => self.client.request(to_method(method), url),
            RequestShape::WithBody { method, body } => self
                .client
                .request(to_method(method), url)
                .body(body.to_string()),
            RequestShape::VerbOverride { verb, body } => self
                .client
                .request(to_method(verb), url)
                .body(body.to_string()),
        };

        let req_builder = self
            .default_headers
            .iter()
            .fold(req_builder, |builder, (key, value)| builder.header(key, value));

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);
        tracing::debug!("HTTP Response Object:: {} {:?}", response.code, response.headers);
        Ok(response)
    }

    /// Sends a request and returns the evaluated, rate-limit stitched text.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::TransportUnavailable`] on network or I/O failure,
    /// or [`HttpError::RemoteRequestFailed`] for statuses in `400..510`.
    pub async fn execute(&self, request: &HttpRequest) -> Result<String, HttpError> {
        let response = self.send(request).await?;
        Ok(response.into_payload()?)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn masked_headers(&self) -> HashMap<&str, &str> {
        self.default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect()
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("default_headers", &self.masked_headers())
            .finish_non_exhaustive()
    }
}

const fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthToken;

    fn config_with_prefix(prefix: Option<&str>) -> DigitalOceanConfig {
        let mut builder =
            DigitalOceanConfig::builder().auth_token(AuthToken::new("test-token").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&config_with_prefix(None)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(user_agent, &format!("digitalocean-api-rust/{SDK_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&config_with_prefix(Some("MyApp/1.0"))).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("digitalocean-api-rust/"));
    }

    #[test]
    fn test_bearer_and_content_type_headers() {
        let client = HttpClient::new(&config_with_prefix(None)).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_debug_masks_token() {
        let client = HttpClient::new(&config_with_prefix(None)).unwrap();
        let debug_str = format!("{client:?}");

        assert!(debug_str.contains("HttpClient"));
        assert!(!debug_str.contains("test-token"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
