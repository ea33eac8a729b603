//! HTTP client types for DigitalOcean API communication.
//!
//! This module provides the transport layer and the engine entry point for
//! making authenticated requests to the DigitalOcean v2 API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DigitalOceanClient`]: The engine; runs an [`ApiRequest`](crate::rest::ApiRequest)
//!   through the full request/response pipeline
//! - [`HttpClient`]: The async transport, with default headers and verb dispatch
//! - [`HttpRequest`]: A request to be sent to the API, and its [`RequestShape`]
//! - [`HttpResponse`]: A raw response, with status evaluation and rate-limit parsing
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`]: The error classifier
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let url = url::Url::parse("https://api.digitalocean.com/v2/account")?;
//! let request = HttpRequest::builder(HttpMethod::Get, url).build();
//!
//! let text = client.execute(&request).await?;
//! ```
//!
//! # Status Handling
//!
//! - **200, 201, 202**: the body text, with rate-limit state stitched in
//! - **204**: a synthetic `{"response":{"request_status":true,"status_code":204}}`
//! - **400 to 509**: [`HttpError::RemoteRequestFailed`]
//! - **Anything else**: an empty payload, logged at `warn`
//!
//! No call is retried.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::DigitalOceanClient;
pub use errors::{
    EnvelopeDecodeError, HttpError, InvalidArgumentError, RemoteRequestError, MAINTENANCE_MESSAGE,
};
pub use http_client::{HttpClient, JSON_CONTENT_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestShape};
pub use http_response::{
    append_rate_limit, HttpResponse, RateLimitHeaders, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING,
    HEADER_RATE_RESET, NO_CONTENT_BODY, RATE_LIMIT_DATE_FORMAT,
};
