//! HTTP response types for the DigitalOcean API SDK.
//!
//! This module provides the [`HttpResponse`] type, status evaluation, and
//! rate-limit stitching.
//!
//! # Status evaluation
//!
//! | Status          | Outcome                                              |
//! |-----------------|------------------------------------------------------|
//! | 200, 201, 202   | the response text                                    |
//! | 204             | [`NO_CONTENT_BODY`]                                  |
//! | 400 to 509      | [`RemoteRequestError`] with the remote `id`/`message` |
//! | anything else   | empty text                                           |
//!
//! # Rate-limit stitching
//!
//! DigitalOcean reports rate-limit state in the `RateLimit-Limit`,
//! `RateLimit-Remaining` and `RateLimit-Reset` headers. When all three are
//! present, a `"ratelimit"` member is spliced into the response text right
//! before its final closing brace, so the envelope decoder sees it as an
//! ordinary sibling key.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::clients::errors::{RemoteRequestError, MAINTENANCE_MESSAGE};

/// Header carrying the request budget of the current window.
pub const HEADER_RATE_LIMIT: &str = "ratelimit-limit";
/// Header carrying the remaining requests in the current window.
pub const HEADER_RATE_REMAINING: &str = "ratelimit-remaining";
/// Header carrying the window reset time in epoch seconds.
pub const HEADER_RATE_RESET: &str = "ratelimit-reset";

/// Synthetic payload substituted for a `204 No Content` response.
pub const NO_CONTENT_BODY: &str = r#"{"response":{"request_status":true,"status_code":204}}"#;

/// Format of the `reset` value in the stitched rate-limit block.
pub const RATE_LIMIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Rate-limit values read from the response headers.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::RateLimitHeaders;
///
/// let limits = RateLimitHeaders::parse("1200", "1199", "1700000000").unwrap();
/// assert_eq!(limits.limit, 1200);
/// assert_eq!(
///     limits.to_fragment(),
///     r#""ratelimit":{"limit":1200,"remaining":1199,"reset":"2023-11-14T22:13:20Z"}"#
/// );
///
/// assert!(RateLimitHeaders::parse("1200", "n/a", "1700000000").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitHeaders {
    /// Requests allowed per window.
    pub limit: u64,
    /// Requests left in the current window.
    pub remaining: u64,
    /// When the current window resets.
    pub reset: DateTime<Utc>,
}

impl RateLimitHeaders {
    /// Parses the three raw header values.
    ///
    /// Returns `None` unless every value is numeric and the reset time is a
    /// representable timestamp.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str, reset: &str) -> Option<Self> {
        let limit = limit.trim().parse().ok()?;
        let remaining = remaining.trim().parse().ok()?;
        let epoch: i64 = reset.trim().parse().ok()?;
        let reset = Utc.timestamp_opt(epoch, 0).single()?;

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Returns the `"ratelimit":{...}` member spliced into response text.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        format!(
            r#""ratelimit":{{"limit":{},"remaining":{},"reset":"{}"}}"#,
            self.limit,
            self.remaining,
            self.reset.format(RATE_LIMIT_DATE_FORMAT)
        )
    }
}

/// An HTTP response from the DigitalOcean API.
///
/// Header names are stored lowercase; lookups are case-insensitive.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, normalizing header names to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_ascii_lowercase()).or_default().extend(v);
                acc
            });

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the last value of a header, if present.
    #[must_use]
    pub fn last_header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns the rate-limit values carried by this response.
    ///
    /// Occasionally the API omits the headers; that yields `None`, as does
    /// any non-numeric value.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitHeaders> {
        RateLimitHeaders::parse(
            self.first_header(HEADER_RATE_LIMIT)?,
            self.first_header(HEADER_RATE_REMAINING)?,
            self.first_header(HEADER_RATE_RESET)?,
        )
    }

    /// Maps the status code to the response text or a remote error.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestError`] for statuses in `400..510`.
    pub fn evaluate(&self) -> Result<String, RemoteRequestError> {
        match self.code {
            200 | 201 | 202 => Ok(self.body.clone()),
            204 => Ok(NO_CONTENT_BODY.to_string()),
            400..=509 => Err(self.remote_error()),
            code => {
                tracing::warn!("Unexpected HTTP status {code}; treating response as empty");
                Ok(String::new())
            }
        }
    }

    /// Evaluates the status and stitches the rate-limit block into the text.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteRequestError`] for statuses in `400..510`.
    pub fn into_payload(self) -> Result<String, RemoteRequestError> {
        let text = self.evaluate()?;
        let payload = append_rate_limit(&text, self.rate_limit().as_ref());
        tracing::debug!("Parsed Response:: {payload}");
        Ok(payload)
    }

    fn remote_error(&self) -> RemoteRequestError {
        tracing::debug!("JSON Response: {}", self.body);

        let parsed = serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .filter(serde_json::Value::is_object);

        let (id, message) = parsed.map_or_else(
            || (String::new(), MAINTENANCE_MESSAGE.to_string()),
            |json| {
                let field = |key: &str| {
                    json.get(key)
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                (field("id"), field("message"))
            },
        );

        let error = RemoteRequestError {
            status: self.code,
            id,
            message,
        };
        tracing::error!("{error}");
        error
    }
}

/// Splices a rate-limit member into JSON object text.
///
/// Blank text yields an empty string. Text without rate-limit values, or
/// without a closing brace, is returned unchanged. Anything after the final
/// closing brace is dropped.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::{append_rate_limit, RateLimitHeaders};
///
/// let limits = RateLimitHeaders::parse("1200", "1199", "1700000000");
/// assert_eq!(
///     append_rate_limit(r#"{"account":{}}"#, limits.as_ref()),
///     r#"{"account":{},"ratelimit":{"limit":1200,"remaining":1199,"reset":"2023-11-14T22:13:20Z"}}"#
/// );
/// assert_eq!(append_rate_limit("   ", limits.as_ref()), "");
/// ```
#[must_use]
pub fn append_rate_limit(text: &str, limits: Option<&RateLimitHeaders>) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let Some(limits) = limits else {
        return text.to_string();
    };
    let Some(close) = text.rfind('}') else {
        return text.to_string();
    };

    let head = &text[..close];
    let separator = if head.trim_end().ends_with('{') { "" } else { "," };
    let fragment = limits.to_fragment();
    tracing::debug!("RateLimitData:: {fragment}");

    format!("{head}{separator}{fragment}}}")
}
