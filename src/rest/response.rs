//! Response model for DigitalOcean API calls.
//!
//! [`ApiResponse<T>`] echoes the originating action, carries the decoded
//! payload, and a success flag that is `false` only when the envelope of a
//! successful HTTP response could not be decoded.
//!
//! A decode failure is reported in-band rather than raised: callers inspect
//! [`ApiResponse::is_success`], or opt into an error with
//! [`ApiResponse::into_result`].
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::rest::{actions, ApiRequest};
//!
//! let response = client.perform(ApiRequest::new(actions::GET_ACCOUNT_INFO)).await?;
//! if response.is_success() {
//!     println!("Account: {:?}", response.data());
//! }
//!
//! // Or treat a decode failure as an error
//! let account = client
//!     .perform(ApiRequest::new(actions::GET_ACCOUNT_INFO))
//!     .await?
//!     .into_result()?;
//! ```

use crate::clients::{EnvelopeDecodeError, HttpError};
use crate::rest::ApiAction;

/// The result of one call.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::rest::{actions, ApiResponse};
///
/// let response = ApiResponse::decoded(actions::GET_ACCOUNT_INFO, None);
/// assert!(response.is_success());
/// assert!(!response.is_data_present());
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    action: ApiAction<T>,
    data: Option<T>,
    success: bool,
    decode_error: Option<EnvelopeDecodeError>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response holding `data`.
    #[must_use]
    pub const fn decoded(action: ApiAction<T>, data: Option<T>) -> Self {
        Self {
            action,
            data,
            success: true,
            decode_error: None,
        }
    }

    /// Creates a response whose envelope could not be decoded.
    #[must_use]
    pub const fn undecodable(action: ApiAction<T>, error: EnvelopeDecodeError) -> Self {
        Self {
            action,
            data: None,
            success: false,
            decode_error: Some(error),
        }
    }

    /// Returns the action that produced this response.
    #[must_use]
    pub const fn action(&self) -> ApiAction<T> {
        self.action
    }

    /// Returns `false` when the envelope could not be decoded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `true` when decoded data is present.
    #[must_use]
    pub const fn is_data_present(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the decoded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the response and returns the decoded data, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns why the envelope could not be decoded, if it could not.
    #[must_use]
    pub const fn decode_error(&self) -> Option<&EnvelopeDecodeError> {
        self.decode_error.as_ref()
    }

    /// Converts the response into its data, raising decode failures.
    ///
    /// A successful response without data (an empty body) yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::EnvelopeDecodeFailed`] if the envelope could not
    /// be decoded.
    pub fn into_result(self) -> Result<Option<T>, HttpError> {
        match self.decode_error {
            Some(error) => Err(error.into()),
            None => Ok(self.data),
        }
    }
}
