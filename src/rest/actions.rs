//! Catalog of supported DigitalOcean operations.
//!
//! Each constant binds an HTTP method, a path template, the response envelope
//! key and the payload type.

use super::ApiAction;
use crate::clients::HttpMethod;
use crate::types::{
    Account, Droplet, Droplets, Firewall, LoadBalancer, RequestStatus, Volume, Volumes,
};

// Account

pub const GET_ACCOUNT_INFO: ApiAction<Account> =
    ApiAction::new(HttpMethod::Get, "/account", "account");

// Droplets

pub const AVAILABLE_DROPLETS: ApiAction<Droplets> =
    ApiAction::new(HttpMethod::Get, "/droplets", "droplets");
pub const GET_DROPLET_INFO: ApiAction<Droplet> =
    ApiAction::new(HttpMethod::Get, "/droplets/%s", "droplet");
pub const CREATE_DROPLET: ApiAction<Droplet> =
    ApiAction::new(HttpMethod::Post, "/droplets", "droplet");
pub const CREATE_DROPLETS: ApiAction<Droplets> =
    ApiAction::new(HttpMethod::Post, "/droplets", "droplets");
pub const DELETE_DROPLET: ApiAction<RequestStatus> =
    ApiAction::new(HttpMethod::Delete, "/droplets/%s", "response");
/// Deletes every droplet carrying the tag given in the `tag_name` query
/// parameter.
pub const DELETE_DROPLET_BY_TAG_NAME: ApiAction<RequestStatus> =
    ApiAction::new(HttpMethod::Delete, "/droplets", "response");

// Volumes

pub const AVAILABLE_VOLUMES: ApiAction<Volumes> =
    ApiAction::new(HttpMethod::Get, "/volumes", "volumes");
pub const CREATE_VOLUME: ApiAction<Volume> =
    ApiAction::new(HttpMethod::Post, "/volumes", "volume");
pub const DELETE_VOLUME: ApiAction<RequestStatus> =
    ApiAction::new(HttpMethod::Delete, "/volumes/%s", "response");

// Load balancers

pub const CREATE_LOAD_BALANCER: ApiAction<LoadBalancer> =
    ApiAction::new(HttpMethod::Post, "/load_balancers", "load_balancer");
pub const UPDATE_LOAD_BALANCER: ApiAction<LoadBalancer> =
    ApiAction::new(HttpMethod::Put, "/load_balancers/%s", "load_balancer");

// Firewalls

pub const CREATE_FIREWALL: ApiAction<Firewall> =
    ApiAction::new(HttpMethod::Post, "/firewalls", "firewall");
pub const UPDATE_FIREWALL: ApiAction<Firewall> =
    ApiAction::new(HttpMethod::Put, "/firewalls/%s", "firewall");

// Tags

pub const TAG_RESOURCE: ApiAction<RequestStatus> =
    ApiAction::new(HttpMethod::Post, "/tags/%s/resources", "response");
/// Carries its resource list in a DELETE body.
pub const UNTAG_RESOURCE: ApiAction<RequestStatus> =
    ApiAction::new(HttpMethod::Delete, "/tags/%s/resources", "response");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_kinds() {
        assert!(AVAILABLE_DROPLETS.is_collection_element());
        assert!(CREATE_DROPLETS.is_collection_element());
        assert!(AVAILABLE_VOLUMES.is_collection_element());
        assert!(!GET_ACCOUNT_INFO.is_collection_element());
        assert!(!CREATE_LOAD_BALANCER.is_collection_element());
        assert!(!DELETE_DROPLET.is_collection_element());
    }

    #[test]
    fn test_placeholder_counts() {
        assert_eq!(GET_DROPLET_INFO.placeholder_count(), 1);
        assert_eq!(UPDATE_FIREWALL.placeholder_count(), 1);
        assert_eq!(TAG_RESOURCE.placeholder_count(), 1);
        assert_eq!(DELETE_DROPLET_BY_TAG_NAME.placeholder_count(), 0);
    }

    #[test]
    fn test_untag_uses_delete() {
        assert_eq!(UNTAG_RESOURCE.method, HttpMethod::Delete);
        assert_eq!(TAG_RESOURCE.method, HttpMethod::Post);
    }
}
