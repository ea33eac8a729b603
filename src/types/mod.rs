//! DigitalOcean resource types.
//!
//! These types decode the payloads unwrapped from response envelopes. The
//! create/update bodies for droplets, volumes, load balancers and firewalls
//! reuse the same types; their wire encoding is defined in [`crate::codec`].
//!
//! Singular types carry the `ratelimit` and `links` blocks folded in from the
//! envelope root; collection types additionally carry `meta`.

mod account;
mod common;
mod droplet;
mod firewall;
mod load_balancer;
mod volume;

pub use account::{Account, AccountStatus};
pub use common::{
    ActionLink, Image, Key, Links, Meta, Pages, RateLimit, Region, RequestStatus, Resource,
    ResourceType, Resources, Size,
};
pub use droplet::{Droplet, DropletStatus, Droplets};
pub use firewall::{
    Destinations, Firewall, FirewallStatus, Firewalls, InboundRules, OutboundRules, Sources,
};
pub use load_balancer::{
    Algorithm, ForwardingRules, HealthCheck, LoadBalancer, LoadBalancerStatus, LoadBalancers,
    Protocol, StickySessionType, StickySessions,
};
pub use volume::{Volume, Volumes};
