use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::types::LoadBalancer;

impl Serialize for LoadBalancer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(slug) = self.region.as_ref().and_then(|r| r.slug.as_ref()) {
            map.serialize_entry("region", slug)?;
        }
        if let Some(algorithm) = self.algorithm {
            map.serialize_entry("algorithm", algorithm.as_str())?;
        }
        if !self.forwarding_rules.is_empty() {
            map.serialize_entry("forwarding_rules", &self.forwarding_rules)?;
        }
        if let Some(health_check) = &self.health_check {
            map.serialize_entry("health_check", health_check)?;
        }
        if let Some(sticky_sessions) = &self.sticky_sessions {
            map.serialize_entry("sticky_sessions", sticky_sessions)?;
        }
        if !self.droplet_ids.is_empty() {
            map.serialize_entry("droplet_ids", &self.droplet_ids)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::encode_body;
    use crate::types::{
        Algorithm, ForwardingRules, HealthCheck, LoadBalancer, Protocol, Region,
        StickySessionType, StickySessions,
    };
    use serde_json::json;

    #[test]
    fn test_load_balancer_body() {
        let lb = LoadBalancer {
            id: Some("4de7ac8b-495b-4884-9a69-1050c6793cd6".to_string()),
            name: Some("example-lb-01".to_string()),
            ip: Some("104.131.186.241".to_string()),
            region: Some(Region::new("nyc3")),
            algorithm: Some(Algorithm::LeastConnections),
            forwarding_rules: vec![ForwardingRules::new(Protocol::Http, 80, Protocol::Http, 8080)],
            health_check: Some(HealthCheck {
                protocol: Some(Protocol::Http),
                port: Some(8080),
                path: Some("/health".to_string()),
                ..HealthCheck::default()
            }),
            sticky_sessions: Some(StickySessions {
                session_type: StickySessionType::None,
                cookie_name: None,
                cookie_ttl_seconds: None,
            }),
            droplet_ids: vec![3_164_444, 3_164_445],
            ..LoadBalancer::default()
        };

        assert_eq!(
            encode_body(&lb).unwrap(),
            json!({
                "name": "example-lb-01",
                "region": "nyc3",
                "algorithm": "least_connections",
                "forwarding_rules": [{
                    "entry_protocol": "http",
                    "entry_port": 80,
                    "target_protocol": "http",
                    "target_port": 8080
                }],
                "health_check": {"protocol": "http", "port": 8080, "path": "/health"},
                "sticky_sessions": {"type": "none"},
                "droplet_ids": [3_164_444, 3_164_445]
            })
        );
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let lb = LoadBalancer {
            name: Some("lb".to_string()),
            region: Some(Region::new("ams3")),
            ..LoadBalancer::default()
        };

        assert_eq!(
            serde_json::to_string(&lb).unwrap(),
            r#"{"name":"lb","region":"ams3"}"#
        );
    }
}
