use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::is_present;
use crate::types::Volume;

impl Serialize for Volume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if is_present(self.description.as_deref()) {
            map.serialize_entry("description", &self.description)?;
        }
        let region = self.region.as_ref().and_then(|r| r.slug.as_deref());
        if is_present(region) {
            map.serialize_entry("region", &region)?;
        }
        if is_present(self.snapshot_id.as_deref()) {
            map.serialize_entry("snapshot_id", &self.snapshot_id)?;
        }
        if let Some(size) = self.size {
            map.serialize_entry("size_gigabytes", &size)?;
        }
        if is_present(self.filesystem_type.as_deref()) {
            map.serialize_entry("filesystem_type", &self.filesystem_type)?;
        }
        if is_present(self.filesystem_label.as_deref()) {
            map.serialize_entry("filesystem_label", &self.filesystem_label)?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }

        map.end()
    }
}
