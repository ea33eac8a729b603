use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::types::Firewall;

impl Serialize for Firewall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if !self.inbound_rules.is_empty() {
            map.serialize_entry("inbound_rules", &self.inbound_rules)?;
        }
        if !self.outbound_rules.is_empty() {
            map.serialize_entry("outbound_rules", &self.outbound_rules)?;
        }
        if !self.droplet_ids.is_empty() {
            map.serialize_entry("droplet_ids", &self.droplet_ids)?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }

        map.end()
    }
}
