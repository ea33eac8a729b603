//! Action descriptors for DigitalOcean API operations.
//!
//! An [`ApiAction`] is the static metadata for one remote operation: the HTTP
//! method, a path template with `%s` positional placeholders, the envelope key
//! the response nests its payload under, and (as a type parameter) the type
//! the payload decodes into.
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::rest::ApiAction;
//! use digitalocean_api::types::{Droplet, Droplets};
//! use digitalocean_api::HttpMethod;
//!
//! const GET_DROPLET: ApiAction<Droplet> =
//!     ApiAction::new(HttpMethod::Get, "/droplets/%s", "droplet");
//! const LIST_DROPLETS: ApiAction<Droplets> =
//!     ApiAction::new(HttpMethod::Get, "/droplets", "droplets");
//!
//! assert!(!GET_DROPLET.is_collection_element());
//! assert!(LIST_DROPLETS.is_collection_element());
//! assert_eq!(GET_DROPLET.placeholder_count(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::clients::HttpMethod;

/// Positional placeholder used in path templates.
pub const PATH_PLACEHOLDER: &str = "%s";

/// Static description of one remote operation whose payload decodes into `T`.
///
/// Descriptors are `Copy` and `const`-constructible so a catalog can be
/// declared as constants.
pub struct ApiAction<T> {
    /// The HTTP method of the operation.
    pub method: HttpMethod,
    /// Path template relative to the version prefix (e.g., `/droplets/%s`).
    pub path: &'static str,
    /// Envelope key of the response payload.
    pub element_name: &'static str,
    target: PhantomData<fn() -> T>,
}

impl<T> ApiAction<T> {
    /// Creates a new action descriptor.
    #[must_use]
    pub const fn new(method: HttpMethod, path: &'static str, element_name: &'static str) -> Self {
        Self {
            method,
            path,
            element_name,
            target: PhantomData,
        }
    }

    /// Returns `true` if the envelope key marks a collection response.
    ///
    /// Collection responses are decoded whole; singular responses are
    /// unwrapped one level under the envelope key.
    #[must_use]
    pub fn is_collection_element(&self) -> bool {
        self.element_name.ends_with('s')
    }

    /// Returns the number of `%s` placeholders in the path template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.path.matches(PATH_PLACEHOLDER).count()
    }
}

impl<T> Clone for ApiAction<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ApiAction<T> {}

impl<T> PartialEq for ApiAction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.path == other.path
            && self.element_name == other.element_name
    }
}

impl<T> Eq for ApiAction<T> {}

impl<T> fmt::Debug for ApiAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiAction")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("element_name", &self.element_name)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

// Verify ApiAction is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiAction<serde_json::Value>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    struct Anything;

    #[test]
    fn test_action_stores_fields_correctly() {
        let action: ApiAction<Anything> =
            ApiAction::new(HttpMethod::Put, "/firewalls/%s", "firewall");

        assert_eq!(action.method, HttpMethod::Put);
        assert_eq!(action.path, "/firewalls/%s");
        assert_eq!(action.element_name, "firewall");
    }

    #[test]
    fn test_collection_element_is_plural_suffix() {
        let plural: ApiAction<Anything> = ApiAction::new(HttpMethod::Get, "/volumes", "volumes");
        let singular: ApiAction<Anything> = ApiAction::new(HttpMethod::Get, "/account", "account");
        let status: ApiAction<Anything> =
            ApiAction::new(HttpMethod::Delete, "/volumes/%s", "response");

        assert!(plural.is_collection_element());
        assert!(!singular.is_collection_element());
        assert!(!status.is_collection_element());
    }

    #[test]
    fn test_placeholder_count() {
        let none: ApiAction<Anything> = ApiAction::new(HttpMethod::Get, "/droplets", "droplets");
        let two: ApiAction<Anything> =
            ApiAction::new(HttpMethod::Get, "/droplets/%s/actions/%s", "action");

        assert_eq!(none.placeholder_count(), 0);
        assert_eq!(two.placeholder_count(), 2);
    }

    #[test]
    fn test_action_is_copy_without_target_bounds() {
        let action: ApiAction<Anything> = ApiAction::new(HttpMethod::Get, "/account", "account");
        let copy = action;

        assert_eq!(action, copy);
        assert!(format!("{copy:?}").contains("Anything"));
    }
}
