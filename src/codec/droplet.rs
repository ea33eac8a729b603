//! Create-request encoding for droplets.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::types::{Droplet, Key};

/// One entry of the flat `ssh_keys` array: an id or a fingerprint.
#[derive(Serialize)]
#[serde(untagged)]
enum KeyRef<'a> {
    Id(u64),
    Fingerprint(&'a str),
}

impl<'a> KeyRef<'a> {
    /// A key contributes its id, then its fingerprint, each when present.
    fn from_key(key: &'a Key) -> impl Iterator<Item = Self> {
        let fingerprint = key
            .fingerprint
            .as_deref()
            .filter(|fp| !fp.trim().is_empty())
            .map(Self::Fingerprint);
        key.id.map(Self::Id).into_iter().chain(fingerprint)
    }
}

impl Serialize for Droplet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if !self.names.is_empty() {
            map.serialize_entry("names", &self.names)?;
        }
        if let Some(slug) = self.region.as_ref().and_then(|r| r.slug.as_ref()) {
            map.serialize_entry("region", slug)?;
        }
        if let Some(size) = &self.size {
            map.serialize_entry("size", size)?;
        }
        if let Some(image) = &self.image {
            match (image.id, &image.slug) {
                (Some(id), _) => map.serialize_entry("image", &id)?,
                (None, Some(slug)) => map.serialize_entry("image", slug)?,
                (None, None) => {}
            }
        }
        if let Some(backups) = self.enable_backup {
            map.serialize_entry("backups", &backups)?;
        }
        if let Some(ipv6) = self.enable_ipv6 {
            map.serialize_entry("ipv6", &ipv6)?;
        }
        if let Some(private_networking) = self.enable_private_networking {
            map.serialize_entry("private_networking", &private_networking)?;
        }
        if !self.keys.is_empty() {
            let keys: Vec<KeyRef<'_>> = self.keys.iter().flat_map(KeyRef::from_key).collect();
            map.serialize_entry("ssh_keys", &keys)?;
        }
        if let Some(user_data) = &self.user_data {
            map.serialize_entry("user_data", user_data)?;
        }
        if !self.volume_ids.is_empty() {
            map.serialize_entry("volumes", &self.volume_ids)?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }
        if let Some(monitoring) = self.install_monitoring {
            map.serialize_entry("monitoring", &monitoring)?;
        }

        map.end()
    }
}
