//! Load balancer resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Links, Meta, RateLimit, Region};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    RoundRobin,
    LeastConnections,
}

impl Algorithm {
    /// Returns the wire value of the algorithm.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::LeastConnections => "least_connections",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Http2,
    Tcp,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerStatus {
    New,
    Active,
    Errored,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ForwardingRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_passthrough: Option<bool>,
}

impl ForwardingRules {
    /// Creates a forwarding rule between two protocol/port pairs.
    #[must_use]
    pub const fn new(
        entry_protocol: Protocol,
        entry_port: u16,
        target_protocol: Protocol,
        target_port: u16,
    ) -> Self {
        Self {
            entry_protocol: Some(entry_protocol),
            entry_port: Some(entry_port),
            target_protocol: Some(target_protocol),
            target_port: Some(target_port),
            certificate_id: None,
            tls_passthrough: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HealthCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_interval_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_timeout_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StickySessionType {
    None,
    Cookies,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickySessions {
    #[serde(rename = "type")]
    pub session_type: StickySessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_ttl_seconds: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct LoadBalancer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub ip: Option<String>,
    pub algorithm: Option<Algorithm>,
    pub status: Option<LoadBalancerStatus>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRules>,
    pub health_check: Option<HealthCheck>,
    pub sticky_sessions: Option<StickySessions>,
    pub region: Option<Region>,
    pub tag: Option<String>,
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
    pub redirect_http_to_https: Option<bool>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct LoadBalancers {
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
}
