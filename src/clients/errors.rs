//! Error classification for DigitalOcean API calls.
//!
//! Every public operation either returns a decoded value or fails with exactly
//! one [`HttpError`] kind:
//!
//! - [`HttpError::RemoteRequestFailed`]: the API answered with a status in `400..510`
//! - [`HttpError::TransportUnavailable`]: the request could not be sent or read
//! - [`HttpError::InvalidArgument`]: a required parameter was missing or blank,
//!   detected before any network call
//! - [`HttpError::EnvelopeDecodeFailed`]: the response envelope could not be
//!   decoded into the target type
//!
//! `EnvelopeDecodeFailed` is never returned by
//! [`DigitalOceanClient::perform`](crate::DigitalOceanClient::perform), which
//! reports decode failures in-band through
//! [`ApiResponse::is_success`](crate::rest::ApiResponse::is_success). It is
//! produced only when a caller converts such a response with
//! [`ApiResponse::into_result`](crate::rest::ApiResponse::into_result).
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::clients::HttpError;
//!
//! match client.get_droplet_info(42).await {
//!     Ok(droplet) => println!("Droplet: {:?}", droplet.name),
//!     Err(HttpError::RemoteRequestFailed(e)) => {
//!         println!("API error {} ({}): {}", e.status, e.id, e.message);
//!     }
//!     Err(HttpError::TransportUnavailable(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidArgument(e)) => println!("Bad call: {e}"),
//!     Err(HttpError::EnvelopeDecodeFailed(e)) => println!("Bad payload: {e}"),
//! }
//! ```

use thiserror::Error;

/// Message used when an error response body is not JSON.
///
/// The API serves an HTML maintenance page instead of a JSON error document
/// during outages.
pub const MAINTENANCE_MESSAGE: &str = "DigitalOcean servers are on maintenance. Wait for \
    official messages from DigitalOcean itself, such as 'Cloud Control Panel, API & \
    Support Ticket System Unavailable'";

/// The remote service rejected the request.
///
/// Carries the HTTP status code and the `id`/`message` pair from the JSON
/// error document. Missing fields are empty strings; a non-JSON body yields
/// an empty `id` and [`MAINTENANCE_MESSAGE`].
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::RemoteRequestError;
///
/// let error = RemoteRequestError {
///     status: 404,
///     id: "not_found".to_string(),
///     message: "The resource you were accessing could not be found.".to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.to_string().contains("not_found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP Status Code: {status}, Error Id: {id}, Error Message: {message}")]
pub struct RemoteRequestError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The remote error identifier (e.g., `not_found`).
    pub id: String,
    /// The remote error message.
    pub message: String,
}

/// A required parameter was missing or blank, or a request was malformed.
///
/// Raised synchronously before any network traffic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// A required parameter was missing, blank, or out of range.
    #[error("Missing required parameter - {name}.")]
    MissingParameter {
        /// The parameter name.
        name: String,
    },

    /// A request body is missing required attributes.
    #[error("Missing required parameters [{fields}] for {operation}.")]
    MissingFields {
        /// Comma separated list of the required attributes.
        fields: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A request body carries an attribute that is not allowed.
    #[error("{reason}")]
    NotAllowed {
        /// Why the attribute is rejected.
        reason: &'static str,
    },

    /// The number of path parameters does not match the path template.
    #[error("Path template '{template}' expects {expected} parameter(s) but {actual} were supplied.")]
    PathParamCount {
        /// The path template of the action.
        template: &'static str,
        /// Placeholders in the template.
        expected: usize,
        /// Values supplied by the caller.
        actual: usize,
    },
}

impl InvalidArgumentError {
    /// Convenience constructor for [`InvalidArgumentError::MissingParameter`].
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }
}

/// The response envelope could not be decoded into the target type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode '{element_name}' envelope: {reason}")]
pub struct EnvelopeDecodeError {
    /// The envelope key of the action.
    pub element_name: &'static str,
    /// Description of the decode failure.
    pub reason: String,
}

/// Unified error type for all DigitalOcean API calls.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API returned an error status.
    #[error(transparent)]
    RemoteRequestFailed(#[from] RemoteRequestError),

    /// Network or I/O failure while issuing the request.
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(#[from] reqwest::Error),

    /// A caller supplied an invalid argument.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The response envelope could not be decoded.
    #[error(transparent)]
    EnvelopeDecodeFailed(#[from] EnvelopeDecodeError),
}

impl HttpError {
    /// Returns the HTTP status code when the remote service rejected the call.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRequestFailed(e) => Some(e.status),
            _ => None,
        }
    }
}
