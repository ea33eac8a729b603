//! Block storage volume resource.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::common::{Links, Meta, RateLimit, Region};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Volume {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<Region>,
    #[serde(rename = "size_gigabytes")]
    pub size: Option<u64>,
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub filesystem_type: Option<String>,
    pub filesystem_label: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Snapshot to restore the volume from on create.
    #[serde(skip_deserializing)]
    pub snapshot_id: Option<String>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Volumes {
    #[serde(default)]
    pub volumes: Vec<Volume>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_deserialization() {
        let volume: Volume = serde_json::from_value(json!({
            "id": "506f78a4-e098-11e5-ad9f-000f53306ae1",
            "region": {"slug": "nyc1"},
            "droplet_ids": [],
            "name": "example",
            "description": "Block store for examples",
            "size_gigabytes": 10,
            "created_at": "2020-03-02T17:00:49Z",
            "filesystem_type": "ext4",
            "filesystem_label": "example",
            "tags": ["aninterestingtag"]
        }))
        .unwrap();

        assert_eq!(volume.size, Some(10));
        assert_eq!(volume.filesystem_type.as_deref(), Some("ext4"));
        assert!(volume.snapshot_id.is_none());
    }
}
