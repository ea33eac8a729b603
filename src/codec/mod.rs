//! Request body encoding.
//!
//! Bodies are encoded through [`serde::Serialize`]. Most types use the
//! derived implementation, with server-assigned fields marked
//! `#[serde(skip_serializing)]`. Four types need a request shape that differs
//! from their response shape and carry hand-written implementations:
//!
//! - [`Droplet`](crate::types::Droplet): region and size as slugs, image as id
//!   or slug, SSH keys as a flat id/fingerprint array
//! - [`Volume`](crate::types::Volume): region as slug, blank strings omitted
//! - [`LoadBalancer`](crate::types::LoadBalancer): region as slug
//! - [`Firewall`](crate::types::Firewall): only the writable rule sets
//!
//! Every implementation emits keys in a fixed order, so encoding the same
//! value twice yields byte-identical JSON.

mod droplet;
mod firewall;
mod load_balancer;
mod volume;

use serde::Serialize;
use serde_json::Value;

/// Encodes a request body into a JSON tree.
///
/// Encoding failures are logged and yield `None`; the request then proceeds
/// without a body.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::codec::encode_body;
/// use digitalocean_api::types::{Resource, ResourceType, Resources};
///
/// let body = Resources {
///     resources: vec![Resource::new(ResourceType::Droplet, 42)],
/// };
/// let value = encode_body(&body).unwrap();
/// assert_eq!(value["resources"][0]["resource_id"], "42");
/// ```
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Option<Value> {
    match serde_json::to_value(body) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(
                body_type = std::any::type_name::<B>(),
                %error,
                "Failed to encode request body"
            );
            None
        }
    }
}

/// Returns `true` if the string is present and not blank.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    use crate::types::RequestStatus;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn test_encode_body_uses_derived_serialization() {
        let status = RequestStatus {
            is_request_success: true,
            status_code: 204,
            rate_limit: None,
        };

        assert_eq!(
            encode_body(&status),
            Some(json!({"request_status": true, "status_code": 204}))
        );
    }

    #[test]
    fn test_encode_body_failure_yields_none() {
        assert!(encode_body(&Unencodable).is_none());
    }

    #[test]
    fn test_encode_body_accepts_unsized_values() {
        let tags: &[&str] = &["web", "db"];
        assert_eq!(encode_body(tags), Some(json!(["web", "db"])));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("nyc3")));
        assert!(!is_present(Some("   ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(None));
    }
}
