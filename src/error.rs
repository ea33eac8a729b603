//! Error types for the DigitalOcean API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors. Errors raised while talking to the API live in
//! [`crate::clients::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Auth token cannot be empty or blank.
    #[error("Auth token cannot be empty. Please provide a valid DigitalOcean API token.")]
    EmptyAuthToken,

    /// API version is not supported.
    #[error("Unsupported API version '{version}'. Only API version 2 is supported.")]
    UnsupportedApiVersion {
        /// The version string that was provided.
        version: String,
    },

    /// API host is invalid.
    #[error("Invalid API host '{url}'. Please provide an http(s) URL with a host (e.g., 'https://api.digitalocean.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Default page size must be positive.
    #[error("Invalid default page size {size}. The page size must be at least 1.")]
    InvalidPageSize {
        /// The page size that was provided.
        size: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
