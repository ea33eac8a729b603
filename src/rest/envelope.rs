//! Response envelope unwrapping.
//!
//! DigitalOcean nests a singular resource one level below its envelope key,
//! while pagination, metadata and (stitched) rate-limit blocks sit at the
//! envelope root:
//!
//! ```json
//! {
//!   "droplet": { "id": 3164494, "name": "example.com" },
//!   "links": { "actions": [] },
//!   "ratelimit": { "limit": 5000, "remaining": 4999, "reset": "2023-11-14T22:13:20Z" }
//! }
//! ```
//!
//! Collection envelopes are decoded whole. Singular envelopes are unwrapped
//! and the root-level `ratelimit`, `links` and `meta` blocks are copied into
//! the unwrapped object, so callers get both in one decoded value.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clients::EnvelopeDecodeError;

/// Root-level key of the stitched rate-limit block.
pub const RATE_LIMIT_ELEMENT_NAME: &str = "ratelimit";
/// Root-level key of the pagination links block.
pub const LINKS_ELEMENT_NAME: &str = "links";
/// Root-level key of the metadata block.
pub const META_ELEMENT_NAME: &str = "meta";

const SIBLING_ELEMENTS: [&str; 3] = [
    RATE_LIMIT_ELEMENT_NAME,
    LINKS_ELEMENT_NAME,
    META_ELEMENT_NAME,
];

/// Extracts the JSON object a response of `element_name` decodes from.
///
/// For a collection the whole root object is returned. Otherwise the object
/// under `element_name` is returned with the sibling blocks present at the
/// root folded in.
///
/// # Errors
///
/// Returns [`EnvelopeDecodeError`] if the text is not a JSON object, or the
/// envelope key is missing or does not hold an object.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::rest::extract_envelope;
/// use serde_json::json;
///
/// let text = r#"{"droplet":{"id":1},"meta":{"total":1}}"#;
/// let object = extract_envelope(text, "droplet", false).unwrap();
///
/// assert_eq!(object, json!({"id": 1, "meta": {"total": 1}}));
/// ```
pub fn extract_envelope(
    text: &str,
    element_name: &'static str,
    is_collection: bool,
) -> Result<Value, EnvelopeDecodeError> {
    let fail = |reason: String| EnvelopeDecodeError {
        element_name,
        reason,
    };

    let root: Value = serde_json::from_str(text).map_err(|e| fail(e.to_string()))?;
    let Value::Object(mut root) = root else {
        return Err(fail("response is not a JSON object".to_string()));
    };

    if is_collection {
        return Ok(Value::Object(root));
    }

    let mut element: Map<String, Value> = match root.remove(element_name) {
        Some(Value::Object(element)) => element,
        Some(_) => return Err(fail(format!("'{element_name}' is not a JSON object"))),
        None => return Err(fail(format!("missing '{element_name}' element"))),
    };

    for key in SIBLING_ELEMENTS {
        if let Some(value) = root.remove(key) {
            element.insert(key.to_string(), value);
        }
    }

    Ok(Value::Object(element))
}

/// Unwraps the envelope of `text` and decodes it into `T`.
///
/// # Errors
///
/// Returns [`EnvelopeDecodeError`] if the envelope cannot be extracted or
/// does not decode into `T`.
pub fn unwrap_envelope<T: DeserializeOwned>(
    text: &str,
    element_name: &'static str,
    is_collection: bool,
) -> Result<T, EnvelopeDecodeError> {
    let object = extract_envelope(text, element_name, is_collection)?;
    serde_json::from_value(object).map_err(|e| EnvelopeDecodeError {
        element_name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
        #[serde(rename = "ratelimit")]
        rate_limit: Option<Value>,
        links: Option<Value>,
        meta: Option<Value>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Items {
        items: Vec<Item>,
        meta: Option<Value>,
    }

    #[test]
    fn test_collection_decodes_whole_body() {
        let text = r#"{"items":[{"id":1},{"id":2}],"meta":{"total":2}}"#;
        let items: Items = unwrap_envelope(text, "items", true).unwrap();

        assert_eq!(items.items.len(), 2);
        assert_eq!(items.meta, Some(json!({"total": 2})));
    }

    #[test]
    fn test_singular_folds_all_present_siblings() {
        let text = r#"{"item":{"id":7},"ratelimit":{"limit":1},"links":{"pages":{}},"meta":{"total":1}}"#;
        let object = extract_envelope(text, "item", false).unwrap();

        assert_eq!(
            object,
            json!({
                "id": 7,
                "ratelimit": {"limit": 1},
                "links": {"pages": {}},
                "meta": {"total": 1}
            })
        );
    }

    #[test]
    fn test_singular_omits_absent_siblings() {
        let text = r#"{"item":{"id":7},"links":{"actions":[]},"other":true}"#;
        let object = extract_envelope(text, "item", false).unwrap();

        assert_eq!(object, json!({"id": 7, "links": {"actions": []}}));

        let item: Item = unwrap_envelope(text, "item", false).unwrap();
        assert!(item.rate_limit.is_none());
        assert!(item.meta.is_none());
    }

    #[test]
    fn test_missing_element_is_decode_error() {
        let error = extract_envelope(r#"{"other":{}}"#, "item", false).unwrap_err();
        assert_eq!(error.element_name, "item");
        assert!(error.reason.contains("missing 'item'"));
    }

    #[test]
    fn test_non_object_text_is_decode_error() {
        assert!(extract_envelope("", "item", false).is_err());
        assert!(extract_envelope("[1,2]", "items", true).is_err());
        assert!(extract_envelope(r#"{"item":3}"#, "item", false).is_err());
    }

    #[test]
    fn test_type_mismatch_is_decode_error() {
        let result: Result<Item, _> = unwrap_envelope(r#"{"item":{"id":"x"}}"#, "item", false);
        assert!(result.is_err());
    }
}
