//! # DigitalOcean API Rust SDK
//!
//! A request/response engine for the DigitalOcean v2 API. Operations are
//! described declaratively as action descriptors; the engine turns a
//! descriptor plus call parameters into one HTTP round trip and turns the
//! response back into a typed value or a classified error.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DigitalOceanConfig`] and [`DigitalOceanConfigBuilder`]
//! - Validated newtypes for the API token and host
//! - Action descriptors ([`rest::ApiAction`]) and a catalog of operations ([`rest::actions`])
//! - URI construction with pagination defaults and positional path parameters
//! - Per-type request body encoding ([`codec`])
//! - Response evaluation with error classification ([`HttpError`])
//! - Rate-limit stitching from the `RateLimit-*` response headers
//! - Envelope unwrapping that folds `links`, `meta` and `ratelimit` into the payload
//! - Typed operations on [`DigitalOceanClient`] for droplets, volumes, load
//!   balancers, firewalls, tags and the account
//!
//! ## Quick Start
//!
//! ```rust
//! use digitalocean_api::{AuthToken, DigitalOceanConfig};
//!
//! let config = DigitalOceanConfig::builder()
//!     .auth_token(AuthToken::new("dop_v1_example").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! Every operation is an `async fn` performing one round trip over `reqwest`,
//! so calls must be awaited inside a Tokio runtime (for example under
//! `#[tokio::main]`). Callers that need a blocking call can drive the future
//! with `tokio::runtime::Runtime::block_on`.
//!
//! ```rust,ignore
//! use digitalocean_api::{AuthToken, DigitalOceanClient, DigitalOceanConfig};
//! use digitalocean_api::types::{Image, Region, Droplet};
//!
//! let client = DigitalOceanClient::new(config)?;
//!
//! // Typed operation
//! let droplet = client
//!     .create_droplet(&Droplet {
//!         name: Some("web-1".to_string()),
//!         region: Some(Region::new("nyc3")),
//!         size: Some("s-1vcpu-1gb".to_string()),
//!         image: Some(Image::from_slug("ubuntu-22-04-x64")),
//!         ..Droplet::default()
//!     })
//!     .await?;
//!
//! // Generic engine call
//! use digitalocean_api::rest::{actions, ApiRequest};
//!
//! let response = client
//!     .perform(ApiRequest::new(actions::AVAILABLE_DROPLETS).page_no(1))
//!     .await?;
//! if response.is_success() {
//!     println!("{:?}", response.data().map(|d| d.droplets.len()));
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and required parameters are checked before any I/O
//! - **Thread-safe**: The client is `Send + Sync` and reusable across tasks
//! - **Single round trip**: No retries, caching or background work
//! - **Soft decode failure**: An undecodable payload is reported on the response, not raised

pub mod clients;
pub mod codec;
pub mod config;
pub mod error;
mod resources;
pub mod rest;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiVersion, AuthToken, DigitalOceanConfig, DigitalOceanConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DigitalOceanClient, EnvelopeDecodeError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidArgumentError, RemoteRequestError,
};
