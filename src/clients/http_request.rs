//! HTTP request types for the DigitalOcean API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! [`RequestShape`] the transport dispatches on.

use std::fmt;

use url::Url;

/// HTTP methods supported by the DigitalOcean API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as it appears on the request line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the transport must put a request on the wire.
///
/// Most HTTP stacks model DELETE as a bodyless request. Endpoints such as
/// "untag resources" or "remove droplets from a load balancer" need a
/// DELETE with a JSON body, so that case is sent as a body-carrying request
/// whose verb is overridden to `DELETE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestShape<'a> {
    /// A request without a body (GET, or any method without a body).
    Bodyless {
        /// The request verb.
        method: HttpMethod,
    },
    /// A POST, PUT or PATCH carrying a body.
    WithBody {
        /// The request verb.
        method: HttpMethod,
        /// The serialized JSON body.
        body: &'a str,
    },
    /// A body-carrying request sent under an explicit verb.
    VerbOverride {
        /// The verb written on the request line.
        verb: HttpMethod,
        /// The serialized JSON body.
        body: &'a str,
    },
}

/// A fully resolved HTTP request to be sent to the DigitalOcean API.
///
/// The URL is already assembled (path, version prefix and query string); the
/// body is already encoded. A body on a GET request is never sent.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::{HttpMethod, HttpRequest, RequestShape};
/// use serde_json::json;
/// use url::Url;
///
/// let url = Url::parse("https://api.digitalocean.com/v2/droplets?tag_name=web").unwrap();
/// let request = HttpRequest::builder(HttpMethod::Delete, url)
///     .body(json!({"droplet_ids": [1, 2]}))
///     .build();
///
/// assert!(matches!(request.shape(), RequestShape::VerbOverride { verb: HttpMethod::Delete, .. }));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute request URL.
    pub url: Url,
    body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub const fn builder(method: HttpMethod, url: Url) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Returns the serialized body that will be sent, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the wire shape of this request.
    #[must_use]
    pub fn shape(&self) -> RequestShape<'_> {
        match (self.http_method, self.body.as_deref()) {
            (HttpMethod::Delete, Some(body)) => RequestShape::VerbOverride {
                verb: HttpMethod::Delete,
                body,
            },
            (method @ (HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch), Some(body)) => {
                RequestShape::WithBody { method, body }
            }
            (method, _) => RequestShape::Bodyless { method },
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: Url,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    const fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            http_method: method,
            url,
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body from an optional, already encoded value.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<serde_json::Value>) -> Self {
        self.body = body;
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// GET requests are always bodyless.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        let body = match self.http_method {
            HttpMethod::Get => None,
            _ => self.body.map(|value| value.to_string()),
        };

        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://api.digitalocean.com/v2/droplets").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_get_request_drops_body() {
        let request = HttpRequest::builder(HttpMethod::Get, url())
            .body(json!({"ignored": true}))
            .build();

        assert!(request.body().is_none());
        assert_eq!(
            request.shape(),
            RequestShape::Bodyless {
                method: HttpMethod::Get
            }
        );
    }

    #[test]
    fn test_post_with_body_is_body_carrying() {
        let request = HttpRequest::builder(HttpMethod::Post, url())
            .body(json!({"name": "web-1"}))
            .build();

        assert_eq!(
            request.shape(),
            RequestShape::WithBody {
                method: HttpMethod::Post,
                body: r#"{"name":"web-1"}"#
            }
        );
    }

    #[test]
    fn test_delete_with_body_uses_verb_override() {
        let request = HttpRequest::builder(HttpMethod::Delete, url())
            .body(json!({"droplet_ids": [3164444]}))
            .build();

        match request.shape() {
            RequestShape::VerbOverride { verb, body } => {
                assert_eq!(verb, HttpMethod::Delete);
                assert_eq!(verb.as_str(), "DELETE");
                assert_eq!(body, r#"{"droplet_ids":[3164444]}"#);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_encoded_body_keeps_serializer_key_order() {
        use crate::codec::encode_body;
        use crate::types::{Droplet, Image, Region};

        let droplet = Droplet {
            name: Some("web".to_string()),
            region: Some(Region::new("nyc3")),
            size: Some("s-1vcpu-1gb".to_string()),
            image: Some(Image::from_slug("ubuntu")),
            ..Droplet::default()
        };

        let request = HttpRequest::builder(HttpMethod::Post, url())
            .maybe_body(encode_body(&droplet))
            .build();

        assert_eq!(
            request.body(),
            Some(r#"{"name":"web","region":"nyc3","size":"s-1vcpu-1gb","image":"ubuntu"}"#)
        );
    }

    #[test]
    fn test_delete_without_body_uses_plain_verb() {
        let request = HttpRequest::builder(HttpMethod::Delete, url())
            .maybe_body(None)
            .build();

        assert_eq!(
            request.shape(),
            RequestShape::Bodyless {
                method: HttpMethod::Delete
            }
        );
    }

    #[test]
    fn test_post_without_body_is_bodyless() {
        let request = HttpRequest::builder(HttpMethod::Post, url()).build();

        assert_eq!(
            request.shape(),
            RequestShape::Bodyless {
                method: HttpMethod::Post
            }
        );
    }
}
