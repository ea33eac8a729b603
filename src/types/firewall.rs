//! Cloud firewall resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Links, Meta, RateLimit};

/// Where inbound traffic may come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Sources {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_uids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Where outbound traffic may go.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Destinations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_uids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundRules {
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    pub sources: Sources,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundRules {
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    pub destinations: Destinations,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirewallStatus {
    Waiting,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Firewall {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<FirewallStatus>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub inbound_rules: Vec<InboundRules>,
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRules>,
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Firewalls {
    #[serde(default)]
    pub firewalls: Vec<Firewall>,
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
    fn test_firewall_deserialization() {
        let firewall: Firewall = serde_json::from_value(json!({
            "id": "bb4b2611-3d72-467b-8602-280330ecd65c",
            "name": "firewall",
            "status": "waiting",
            "inbound_rules": [{
                "protocol": "tcp",
                "ports": "22",
                "sources": {"addresses": ["0.0.0.0/0", "::/0"]}
            }],
            "outbound_rules": [{
                "protocol": "icmp",
                "ports": "0",
                "destinations": {"addresses": ["0.0.0.0/0"]}
            }],
            "created_at": "2017-05-23T21:24:00Z",
            "droplet_ids": [8_043_964],
            "tags": [],
            "pending_changes": []
        }))
        .unwrap();

        assert_eq!(firewall.status, Some(FirewallStatus::Waiting));
        assert_eq!(firewall.inbound_rules[0].sources.addresses.len(), 2);
        assert_eq!(firewall.outbound_rules[0].protocol, "icmp");
    }

    #[test]
    fn test_sources_omit_empty_lists() {
        let sources = Sources {
            tags: vec!["web".into()],
            ..Sources::default()
        };

        assert_eq!(serde_json::to_value(&sources).unwrap(), json!({"tags": ["web"]}));
    }
}
