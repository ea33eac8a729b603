//! Droplet resource.
//!
//! `Droplet` decodes the API representation and doubles as the create
//! request body; its wire encoding lives in [`crate::codec`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::common::{Image, Key, Links, Meta, RateLimit, Region, Size};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DropletStatus {
    New,
    Active,
    Off,
    Archive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Droplet {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub memory: Option<u64>,
    pub vcpus: Option<u32>,
    pub disk: Option<u64>,
    pub locked: Option<bool>,
    pub status: Option<DropletStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub region: Option<Region>,
    pub image: Option<Image>,
    /// Size slug (e.g., `s-1vcpu-1gb`).
    #[serde(rename = "size_slug")]
    pub size: Option<String>,
    #[serde(rename = "size")]
    pub size_info: Option<Size>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub backup_ids: Vec<u64>,
    #[serde(default)]
    pub snapshot_ids: Vec<u64>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub vpc_uuid: Option<String>,

    // Request-only attributes.
    /// Names for a multi-droplet create.
    #[serde(skip_deserializing)]
    pub names: Vec<String>,
    #[serde(skip_deserializing)]
    pub enable_backup: Option<bool>,
    #[serde(skip_deserializing)]
    pub enable_ipv6: Option<bool>,
    #[serde(skip_deserializing)]
    pub enable_private_networking: Option<bool>,
    #[serde(skip_deserializing)]
    pub keys: Vec<Key>,
    #[serde(skip_deserializing)]
    pub user_data: Option<String>,
    #[serde(skip_deserializing)]
    pub install_monitoring: Option<bool>,

    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Droplets {
    #[serde(default)]
    pub droplets: Vec<Droplet>,
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
    fn test_droplet_deserialization_maps_size_fields() {
        let droplet: Droplet = serde_json::from_value(json!({
            "id": 3_164_494,
            "name": "example.com",
            "memory": 1024,
            "vcpus": 1,
            "disk": 25,
            "locked": false,
            "status": "active",
            "created_at": "2020-07-21T18:37:44Z",
            "features": ["backups", "ipv6"],
            "image": {"id": 6_918_990, "slug": "ubuntu-20-04-x64"},
            "size": {"slug": "s-1vcpu-1gb", "memory": 1024, "price_monthly": 5.0},
            "size_slug": "s-1vcpu-1gb",
            "region": {"slug": "nyc3", "name": "New York 3"},
            "tags": ["web"],
            "networks": {"v4": []}
        }))
        .unwrap();

        assert_eq!(droplet.id, Some(3_164_494));
        assert_eq!(droplet.status, Some(DropletStatus::Active));
        assert_eq!(droplet.size.as_deref(), Some("s-1vcpu-1gb"));
        assert_eq!(
            droplet.size_info.and_then(|s| s.memory),
            Some(1024)
        );
        assert_eq!(droplet.region.and_then(|r| r.slug).as_deref(), Some("nyc3"));
        assert!(droplet.names.is_empty());
        assert!(droplet.enable_backup.is_none());
    }

    #[test]
    fn test_droplets_collection_deserialization() {
        let droplets: Droplets = serde_json::from_value(json!({
            "droplets": [{"id": 1}, {"id": 2}],
            "links": {"pages": {"next": "https://api.digitalocean.com/v2/droplets?page=2"}},
            "meta": {"total": 40}
        }))
        .unwrap();

        assert_eq!(droplets.droplets.len(), 2);
        assert_eq!(droplets.meta.and_then(|m| m.total), Some(40));
        assert!(droplets.links.is_some_and(|l| l.has_next_page()));
    }
}
