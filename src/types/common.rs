//! Types shared across DigitalOcean resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate-limit state stitched into a response from its headers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Pages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActionLink {
    pub id: u64,
    pub rel: String,
    pub href: String,
}

/// Pagination and related-action links from the envelope root.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionLink>,
}

impl Links {
    /// Returns `true` if another page follows this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pages.as_ref().is_some_and(|pages| pages.next.is_some())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Region {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(default, skip_serializing)]
    pub sizes: Vec<String>,
    #[serde(skip_serializing)]
    pub available: Option<bool>,
    #[serde(default, skip_serializing)]
    pub features: Vec<String>,
}

impl Region {
    /// Creates a region reference from its slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Size {
    pub slug: Option<String>,
    pub memory: Option<u64>,
    pub vcpus: Option<u32>,
    pub disk: Option<u64>,
    pub transfer: Option<f64>,
    pub price_monthly: Option<f64>,
    pub price_hourly: Option<f64>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub distribution: Option<String>,
    pub slug: Option<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub min_disk_size: Option<u64>,
}

impl Image {
    /// Creates an image reference from its numeric id.
    #[must_use]
    pub fn from_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Creates an image reference from its slug.
    #[must_use]
    pub fn from_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

/// An SSH key, referenced by id or fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Key {
    pub id: Option<u64>,
    pub fingerprint: Option<String>,
    pub name: Option<String>,
    pub public_key: Option<String>,
}

impl Key {
    #[must_use]
    pub fn from_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_fingerprint(fingerprint: impl Into<String>) -> Self {
        Self {
            fingerprint: Some(fingerprint.into()),
            ..Self::default()
        }
    }
}

/// Outcome of a call that returns no resource (deletes, tagging).
///
/// Decoded from the payload substituted for `204 No Content`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestStatus {
    #[serde(rename = "request_status")]
    pub is_request_success: bool,
    pub status_code: u16,
    #[serde(rename = "ratelimit", skip_serializing)]
    pub rate_limit: Option<RateLimit>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Droplet,
    Image,
    Volume,
    VolumeSnapshot,
}

/// A taggable resource reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    #[serde(rename = "resource_id")]
    pub id: String,
    #[serde(rename = "resource_type")]
    pub resource_type: ResourceType,
}

impl Resource {
    #[must_use]
    pub fn new(resource_type: ResourceType, id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            resource_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Resources {
    pub resources: Vec<Resource>,
}
