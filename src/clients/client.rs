//! The request/response engine entry point.
//!
//! [`DigitalOceanClient::perform`] runs one [`ApiRequest`] through the whole
//! pipeline: URL construction, body attachment, transport, status
//! evaluation, rate-limit stitching and envelope decoding.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::DigitalOceanConfig;
use crate::rest::{build_uri, unwrap_envelope, ApiRequest, ApiResponse};

/// Client for the DigitalOcean v2 API.
///
/// The client is immutable after construction and can be shared across
/// concurrent tasks. Each call performs exactly one round trip.
///
/// # Thread Safety
///
/// `DigitalOceanClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use digitalocean_api::{AuthToken, DigitalOceanClient, DigitalOceanConfig};
/// use digitalocean_api::rest::{actions, ApiRequest};
///
/// let config = DigitalOceanConfig::builder()
///     .auth_token(AuthToken::new("dop_v1_...")?)
///     .build()?;
/// let client = DigitalOceanClient::new(config)?;
///
/// let response = client
///     .perform(ApiRequest::new(actions::GET_DROPLET_INFO).path_param(3_164_494))
///     .await?;
/// if let Some(droplet) = response.data() {
///     println!("{:?}", droplet.name);
/// }
/// ```
#[derive(Debug)]
pub struct DigitalOceanClient {
    config: DigitalOceanConfig,
    http: HttpClient,
}

// Verify DigitalOceanClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigitalOceanClient>();
};

impl DigitalOceanClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::TransportUnavailable`] if the HTTP transport
    /// cannot be initialized.
    pub fn new(config: DigitalOceanConfig) -> Result<Self, HttpError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &DigitalOceanConfig {
        &self.config
    }

    /// Performs one API call.
    ///
    /// A payload that cannot be decoded into `T` does not fail the call: the
    /// returned response has `is_success() == false` and carries the decode
    /// error. An empty payload yields a successful response without data.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidArgument`] if the path parameters do not match
    ///   the action's template
    /// - [`HttpError::TransportUnavailable`] on network or I/O failure
    /// - [`HttpError::RemoteRequestFailed`] for statuses in `400..510`
    pub async fn perform<T: DeserializeOwned>(
        &self,
        mut request: ApiRequest<T>,
    ) -> Result<ApiResponse<T>, HttpError> {
        let action = request.action();
        let url = build_uri(
            self.config.api_host(),
            self.config.api_version(),
            &request,
            self.config.default_page_size(),
        )?;

        let http_request = HttpRequest::builder(action.method, url)
            .maybe_body(request.take_body())
            .build();
        let text = self.http.execute(&http_request).await?;

        if text.trim().is_empty() {
            return Ok(ApiResponse::decoded(action, None));
        }

        match unwrap_envelope::<T>(&text, action.element_name, action.is_collection_element()) {
            Ok(data) => {
                tracing::debug!("API Response:: {}", text);
                Ok(ApiResponse::decoded(action, Some(data)))
            }
            Err(error) => {
                tracing::error!(
                    element = action.element_name,
                    %error,
                    "Failed to decode API response envelope"
                );
                Ok(ApiResponse::undecodable(action, error))
            }
        }
    }
}
