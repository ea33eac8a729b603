//! Request model for DigitalOcean API calls.
//!
//! An [`ApiRequest`] describes one call: the action descriptor, an optional
//! encoded body, positional path parameters, query parameters and paging.
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::rest::{actions, ApiRequest};
//!
//! let request = ApiRequest::new(actions::AVAILABLE_DROPLETS)
//!     .page_no(2)
//!     .per_page(50)
//!     .query_param("tag_name", "web");
//!
//! assert_eq!(request.page(), Some(2));
//! assert!(request.is_collection_element());
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

use crate::codec;
use crate::rest::ApiAction;

/// Describes one call against the DigitalOcean API.
///
/// Requests are built fresh per call and consumed by
/// [`DigitalOceanClient::perform`](crate::DigitalOceanClient::perform).
#[derive(Debug, Clone)]
pub struct ApiRequest<T> {
    action: ApiAction<T>,
    body: Option<serde_json::Value>,
    path_params: Vec<String>,
    query_params: BTreeMap<String, String>,
    page_no: Option<u32>,
    per_page: Option<u32>,
}

impl<T> ApiRequest<T> {
    /// Creates a request for the given action with no parameters.
    #[must_use]
    pub const fn new(action: ApiAction<T>) -> Self {
        Self {
            action,
            body: None,
            path_params: Vec::new(),
            query_params: BTreeMap::new(),
            page_no: None,
            per_page: None,
        }
    }

    /// Encodes `body` through the body codec and attaches it.
    ///
    /// An encoding failure is logged and leaves the request without a body.
    #[must_use]
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = codec::encode_body(body);
        self
    }

    /// Appends a positional path parameter.
    #[must_use]
    pub fn path_param(mut self, value: impl Display) -> Self {
        self.path_params.push(value.to_string());
        self
    }

    /// Adds a query parameter, replacing any earlier value for the key.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page_no(mut self, page_no: u32) -> Self {
        self.page_no = Some(page_no);
        self
    }

    /// Sets the page size. Only applies to GET requests.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns the action descriptor.
    #[must_use]
    pub const fn action(&self) -> ApiAction<T> {
        self.action
    }

    /// Returns the encoded body, if any.
    #[must_use]
    pub const fn encoded_body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Takes the encoded body out of the request.
    #[must_use]
    pub fn take_body(&mut self) -> Option<serde_json::Value> {
        self.body.take()
    }

    /// Returns the positional path parameters.
    #[must_use]
    pub fn path_params(&self) -> &[String] {
        &self.path_params
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    /// Returns the page number, if set.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        self.page_no
    }

    /// Returns the page size, if set.
    #[must_use]
    pub const fn page_size(&self) -> Option<u32> {
        self.per_page
    }

    /// Returns `true` if the action's envelope key marks a collection.
    #[must_use]
    pub fn is_collection_element(&self) -> bool {
        self.action.is_collection_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use serde_json::json;

    const ACTION: ApiAction<serde_json::Value> =
        ApiAction::new(HttpMethod::Post, "/tags/%s/resources", "response");

    #[test]
    fn test_new_request_has_no_parameters() {
        let request = ApiRequest::new(ACTION);

        assert!(request.encoded_body().is_none());
        assert!(request.path_params().is_empty());
        assert!(request.query_params().is_empty());
        assert_eq!(request.page(), None);
        assert_eq!(request.page_size(), None);
        assert!(!request.is_collection_element());
    }

    #[test]
    fn test_path_params_keep_order() {
        let request = ApiRequest::new(ACTION).path_param("first").path_param(42);

        assert_eq!(request.path_params(), ["first", "42"]);
    }

    #[test]
    fn test_query_param_replaces_same_key() {
        let request = ApiRequest::new(ACTION)
            .query_param("region", "nyc1")
            .query_param("region", "ams3");

        assert_eq!(request.query_params().len(), 1);
        assert_eq!(
            request.query_params().get("region"),
            Some(&"ams3".to_string())
        );
    }

    #[test]
    fn test_body_is_encoded_on_attach() {
        let mut request =
            ApiRequest::new(ACTION).body(&json!({"resources": [{"resource_id": "9"}]}));

        assert_eq!(
            request.encoded_body(),
            Some(&json!({"resources": [{"resource_id": "9"}]}))
        );
        assert!(request.take_body().is_some());
        assert!(request.encoded_body().is_none());
    }
}
