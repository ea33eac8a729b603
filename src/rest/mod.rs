//! Request/response model for the DigitalOcean v2 API.
//!
//! This module provides the declarative layer of the engine:
//!
//! - **[`ApiAction<T>`]**: static metadata for one operation (method, `%s` path
//!   template, envelope key, payload type)
//! - **[`actions`]**: the catalog of supported operations
//! - **[`ApiRequest<T>`]**: an action plus call parameters and an encoded body
//! - **[`ApiResponse<T>`]**: the decoded payload, or why it could not be decoded
//! - **URI building**: [`build_uri`] and [`build_path`]
//! - **Envelope unwrapping**: [`unwrap_envelope`] and [`extract_envelope`]
//! - **[`validation`]**: precondition checks run before a request is built
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::rest::{actions, build_uri, ApiRequest};
//! use digitalocean_api::{ApiHost, ApiVersion};
//!
//! let request = ApiRequest::new(actions::AVAILABLE_DROPLETS).page_no(2);
//! let host = ApiHost::new("https://api.digitalocean.com").unwrap();
//! let url = build_uri(&host, ApiVersion::V2, &request, 25).unwrap();
//!
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.digitalocean.com/v2/droplets?page=2&per_page=25"
//! );
//! ```

mod action;
pub mod actions;
mod envelope;
mod request;
mod response;
mod uri;
pub mod validation;

pub use action::{ApiAction, PATH_PLACEHOLDER};
pub use envelope::{
    extract_envelope, unwrap_envelope, LINKS_ELEMENT_NAME, META_ELEMENT_NAME,
    RATE_LIMIT_ELEMENT_NAME,
};
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use uri::{build_path, build_uri, PARAM_PAGE_NO, PARAM_PER_PAGE};
