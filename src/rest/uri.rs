//! URI construction for DigitalOcean API requests.
//!
//! The request URL is `scheme://host/{apiVersion}{path}?query`, where the path
//! is the action's template with `%s` placeholders replaced positionally.
//!
//! # Query construction
//!
//! 1. `page`, when the request carries a page number
//! 2. `per_page`, on GET requests only, falling back to the default page size
//! 3. every query parameter of the request
//!
//! A later parameter with the same name replaces an earlier one.
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::rest::{actions, build_uri, ApiRequest};
//! use digitalocean_api::{ApiHost, ApiVersion};
//!
//! let request = ApiRequest::new(actions::GET_DROPLET_INFO).path_param(3164494);
//! let url = build_uri(&ApiHost::default(), ApiVersion::V2, &request, 25).unwrap();
//!
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.digitalocean.com/v2/droplets/3164494?per_page=25"
//! );
//! ```

use url::Url;

use crate::clients::{HttpError, HttpMethod, InvalidArgumentError};
use crate::config::{ApiHost, ApiVersion};
use crate::rest::action::PATH_PLACEHOLDER;
use crate::rest::ApiRequest;

/// Query parameter carrying the page number.
pub const PARAM_PAGE_NO: &str = "page";
/// Query parameter carrying the page size.
pub const PARAM_PER_PAGE: &str = "per_page";

/// Substitutes `params` into the `%s` placeholders of `template`, in order.
///
/// Values are inserted verbatim and never reordered.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::PathParamCount`] if the number of values
/// differs from the number of placeholders.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::rest::build_path;
///
/// let path = build_path("/droplets/%s/actions/%s", &["3164494", "36804636"]).unwrap();
/// assert_eq!(path, "/droplets/3164494/actions/36804636");
///
/// assert!(build_path("/droplets/%s", &[] as &[&str]).is_err());
/// ```
pub fn build_path<S: AsRef<str>>(
    template: &'static str,
    params: &[S],
) -> Result<String, InvalidArgumentError> {
    let segments: Vec<&str> = template.split(PATH_PLACEHOLDER).collect();
    let expected = segments.len() - 1;
    if expected != params.len() {
        return Err(InvalidArgumentError::PathParamCount {
            template,
            expected,
            actual: params.len(),
        });
    }

    let mut path = String::with_capacity(template.len());
    for (segment, value) in segments.iter().zip(params) {
        path.push_str(segment);
        path.push_str(value.as_ref());
    }
    if let Some(tail) = segments.last() {
        path.push_str(tail);
    }

    Ok(path)
}

/// Builds the absolute request URL for `request`.
///
/// # Errors
///
/// Returns [`HttpError::InvalidArgument`] if the path parameters do not match
/// the template.
pub fn build_uri<T>(
    host: &ApiHost,
    version: ApiVersion,
    request: &ApiRequest<T>,
    default_page_size: u32,
) -> Result<Url, HttpError> {
    let action = request.action();
    let path = build_path(action.path, request.path_params())?;

    let mut url = host.as_url().clone();
    url.set_path(&format!("/{version}{path}"));

    let mut query: Vec<(String, String)> = Vec::new();
    if let Some(page_no) = request.page() {
        set_parameter(&mut query, PARAM_PAGE_NO, page_no.to_string());
    }
    if action.method == HttpMethod::Get {
        let per_page = request.page_size().unwrap_or(default_page_size);
        set_parameter(&mut query, PARAM_PER_PAGE, per_page.to_string());
    }
    for (key, value) in request.query_params() {
        set_parameter(&mut query, key, value.clone());
    }

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// Sets a parameter, replacing an existing value in place.
fn set_parameter(query: &mut Vec<(String, String)>, key: &str, value: String) {
    match query.iter_mut().find(|(existing, _)| existing == key) {
        Some(entry) => entry.1 = value,
        None => query.push((key.to_string(), value)),
    }
}
