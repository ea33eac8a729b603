//! Precondition checks run before a request is built.
//!
//! Each check returns [`InvalidArgumentError`] so callers fail fast without
//! touching the network.

use crate::clients::InvalidArgumentError;
use crate::types::{
    Droplet, Firewall, ForwardingRules, HealthCheck, LoadBalancer, Region, Resource, Volume,
};

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

fn reject(error: InvalidArgumentError) -> Result<(), InvalidArgumentError> {
    tracing::error!(%error, "Request precondition failed");
    Err(error)
}

/// Fails if `value` is empty or only whitespace.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingParameter`] naming `name`.
pub fn check_blank(value: &str, name: &str) -> Result<(), InvalidArgumentError> {
    if is_blank(Some(value)) {
        return reject(InvalidArgumentError::missing(name));
    }
    Ok(())
}

/// Fails if a numeric identifier is zero.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingParameter`] naming `name`.
pub fn check_id(id: u64, name: &str) -> Result<(), InvalidArgumentError> {
    if id == 0 {
        return reject(InvalidArgumentError::missing(name));
    }
    Ok(())
}

/// Fails if a page number is zero. Pages are 1-based.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingParameter`] naming `pageNo`.
pub fn check_page_no(page_no: u32) -> Result<(), InvalidArgumentError> {
    if page_no == 0 {
        return reject(InvalidArgumentError::missing("pageNo"));
    }
    Ok(())
}

fn has_image(droplet: &Droplet) -> bool {
    droplet
        .image
        .as_ref()
        .is_some_and(|image| image.id.is_some() || !is_blank(image.slug.as_deref()))
}

fn has_region(region: Option<&Region>) -> bool {
    region.is_some_and(|r| !is_blank(r.slug.as_deref()))
}

/// Checks a single-droplet create body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the name, region, size
/// or image is missing.
pub fn check_droplet_create(droplet: &Droplet) -> Result<(), InvalidArgumentError> {
    if is_blank(droplet.name.as_deref())
        || !has_region(droplet.region.as_ref())
        || is_blank(droplet.size.as_deref())
        || !has_image(droplet)
    {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Name, Region Slug, Size Slug, Image Id/Slug",
            operation: "create droplet",
        });
    }
    Ok(())
}

/// Checks a multi-droplet create body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the names, region, size
/// or image is missing, and [`InvalidArgumentError::NotAllowed`] if a single
/// `name` is also set.
pub fn check_droplets_create(droplet: &Droplet) -> Result<(), InvalidArgumentError> {
    if droplet.names.is_empty()
        || !has_region(droplet.region.as_ref())
        || is_blank(droplet.size.as_deref())
        || !has_image(droplet)
    {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Names, Region Slug, Size Slug, Image Id/Slug",
            operation: "creating multiple droplets",
        });
    }
    if !is_blank(droplet.name.as_deref()) {
        return reject(InvalidArgumentError::NotAllowed {
            reason: "Name parameter is not allowed, while creating multiple droplet instead use 'names' attributes.",
        });
    }
    Ok(())
}

/// Checks a volume create body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the name, region or size
/// is missing.
pub fn check_volume_create(volume: &Volume) -> Result<(), InvalidArgumentError> {
    if is_blank(volume.name.as_deref()) || volume.region.is_none() || volume.size.is_none() {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Name, Region Slug, Size",
            operation: "create volume",
        });
    }
    Ok(())
}

/// Checks that at least one forwarding rule is given and each names both
/// protocol/port pairs.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`].
pub fn check_forwarding_rules(rules: &[ForwardingRules]) -> Result<(), InvalidArgumentError> {
    if rules.is_empty() {
        return reject(InvalidArgumentError::MissingFields {
            fields: "ForwardingRules",
            operation: "load balancer",
        });
    }
    let incomplete = rules.iter().any(|rule| {
        rule.entry_protocol.is_none()
            || rule.entry_port.is_none()
            || rule.target_protocol.is_none()
            || rule.target_port.is_none()
    });
    if incomplete {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Entry Protocol, Entry Port, Target Protocol, Target Port",
            operation: "forwarding rules",
        });
    }
    Ok(())
}

/// Checks that a health check, if given, names its protocol and port.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`].
pub fn check_health_check(health_check: Option<&HealthCheck>) -> Result<(), InvalidArgumentError> {
    match health_check {
        Some(check) if check.protocol.is_none() || check.port.is_none() => {
            reject(InvalidArgumentError::MissingFields {
                fields: "Protocol, Port",
                operation: "health check",
            })
        }
        _ => Ok(()),
    }
}

/// Checks a load balancer create body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the name or region is
/// missing, or the forwarding rules or health check are incomplete.
pub fn check_load_balancer_create(lb: &LoadBalancer) -> Result<(), InvalidArgumentError> {
    if is_blank(lb.name.as_deref()) || lb.region.is_none() {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Name, Region Slug",
            operation: "create loadBalancer",
        });
    }
    check_forwarding_rules(&lb.forwarding_rules)?;
    check_health_check(lb.health_check.as_ref())
}

/// Checks a load balancer update body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the id, name or region
/// is missing, or the forwarding rules or health check are incomplete.
pub fn check_load_balancer_update(lb: &LoadBalancer) -> Result<(), InvalidArgumentError> {
    if is_blank(lb.id.as_deref()) || is_blank(lb.name.as_deref()) || lb.region.is_none() {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Id, Name, Region Slug",
            operation: "update loadBalancer",
        });
    }
    check_forwarding_rules(&lb.forwarding_rules)?;
    check_health_check(lb.health_check.as_ref())
}

fn has_rules(firewall: &Firewall) -> bool {
    !is_blank(firewall.name.as_deref())
        && !firewall.inbound_rules.is_empty()
        && !firewall.outbound_rules.is_empty()
}

/// Checks a firewall create body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the name or either rule
/// set is missing.
pub fn check_firewall_create(firewall: &Firewall) -> Result<(), InvalidArgumentError> {
    if !has_rules(firewall) {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Name, Inbound rules, Outbound rules",
            operation: "create firewall",
        });
    }
    Ok(())
}

/// Checks a firewall update body.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingFields`] if the id, name or either
/// rule set is missing.
pub fn check_firewall_update(firewall: &Firewall) -> Result<(), InvalidArgumentError> {
    if is_blank(firewall.id.as_deref()) || !has_rules(firewall) {
        return reject(InvalidArgumentError::MissingFields {
            fields: "Id, Name, Inbound rules, Outbound rules",
            operation: "update firewall info",
        });
    }
    Ok(())
}

/// Checks a tag name and the resources being tagged or untagged.
///
/// `verb` is `"tag"` or `"untag"` and only shapes the error message.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingParameter`].
pub fn check_tagging(
    tag_name: &str,
    resources: &[Resource],
    verb: &str,
) -> Result<(), InvalidArgumentError> {
    check_blank(tag_name, "tag name")?;
    if resources.is_empty() {
        return reject(InvalidArgumentError::missing(format!(
            "list of resources for {verb}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Destinations, Image, InboundRules, OutboundRules, Protocol, ResourceType, Sources,
    };

    fn droplet() -> Droplet {
        Droplet {
            name: Some("web-1".to_string()),
            region: Some(Region::new("nyc3")),
            size: Some("s-1vcpu-1gb".to_string()),
            image: Some(Image::from_id(6_918_990)),
            ..Droplet::default()
        }
    }

    fn load_balancer() -> LoadBalancer {
        LoadBalancer {
            name: Some("lb".to_string()),
            region: Some(Region::new("nyc3")),
            forwarding_rules: vec![ForwardingRules::new(Protocol::Http, 80, Protocol::Http, 80)],
            ..LoadBalancer::default()
        }
    }

    fn firewall() -> Firewall {
        Firewall {
            name: Some("fw".to_string()),
            inbound_rules: vec![InboundRules {
                protocol: "tcp".to_string(),
                ports: Some("22".to_string()),
                sources: Sources::default(),
            }],
            outbound_rules: vec![OutboundRules {
                protocol: "tcp".to_string(),
                ports: None,
                destinations: Destinations::default(),
            }],
            ..Firewall::default()
        }
    }

    #[test]
    fn test_check_blank() {
        assert!(check_blank("web", "tagName").is_ok());

        let error = check_blank("  ", "tagName").unwrap_err();
        assert_eq!(error.to_string(), "Missing required parameter - tagName.");
    }

    #[test]
    fn test_check_id_and_page_no() {
        assert!(check_id(1, "dropletId").is_ok());
        assert_eq!(
            check_id(0, "dropletId").unwrap_err().to_string(),
            "Missing required parameter - dropletId."
        );
        assert!(check_page_no(1).is_ok());
        assert_eq!(
            check_page_no(0).unwrap_err().to_string(),
            "Missing required parameter - pageNo."
        );
    }

    #[test]
    fn test_droplet_create_requires_all_four_fields() {
        assert!(check_droplet_create(&droplet()).is_ok());

        let without_image = Droplet {
            image: Some(Image::default()),
            ..droplet()
        };
        assert_eq!(
            check_droplet_create(&without_image).unwrap_err().to_string(),
            "Missing required parameters [Name, Region Slug, Size Slug, Image Id/Slug] for create droplet."
        );
    }

    #[test]
    fn test_droplets_create_rejects_single_name() {
        let multi = Droplet {
            name: None,
            names: vec!["web-1".to_string(), "web-2".to_string()],
            ..droplet()
        };
        assert!(check_droplets_create(&multi).is_ok());

        let both = Droplet {
            names: vec!["web-1".to_string()],
            ..droplet()
        };
        assert!(matches!(
            check_droplets_create(&both),
            Err(InvalidArgumentError::NotAllowed { .. })
        ));

        assert!(matches!(
            check_droplets_create(&droplet()),
            Err(InvalidArgumentError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_volume_create() {
        let volume = Volume {
            name: Some("data".to_string()),
            region: Some(Region::new("nyc1")),
            size: Some(10),
            ..Volume::default()
        };
        assert!(check_volume_create(&volume).is_ok());

        let unsized_volume = Volume { size: None, ..volume };
        assert_eq!(
            check_volume_create(&unsized_volume).unwrap_err().to_string(),
            "Missing required parameters [Name, Region Slug, Size] for create volume."
        );
    }

    #[test]
    fn test_load_balancer_checks() {
        assert!(check_load_balancer_create(&load_balancer()).is_ok());
        assert!(check_load_balancer_update(&load_balancer()).is_err());

        let with_id = LoadBalancer {
            id: Some("4de7ac8b".to_string()),
            ..load_balancer()
        };
        assert!(check_load_balancer_update(&with_id).is_ok());

        let no_rules = LoadBalancer {
            forwarding_rules: Vec::new(),
            ..load_balancer()
        };
        assert!(check_load_balancer_create(&no_rules).is_err());
    }

    #[test]
    fn test_forwarding_rule_must_be_complete() {
        let partial = ForwardingRules {
            entry_port: None,
            ..ForwardingRules::new(Protocol::Https, 443, Protocol::Http, 80)
        };

        assert!(matches!(
            check_forwarding_rules(&[partial]),
            Err(InvalidArgumentError::MissingFields { operation: "forwarding rules", .. })
        ));
    }

    #[test]
    fn test_health_check_optional_but_complete() {
        assert!(check_health_check(None).is_ok());

        let partial = HealthCheck {
            protocol: Some(Protocol::Tcp),
            ..HealthCheck::default()
        };
        assert_eq!(
            check_health_check(Some(&partial)).unwrap_err().to_string(),
            "Missing required parameters [Protocol, Port] for health check."
        );
    }

    #[test]
    fn test_firewall_checks() {
        assert!(check_firewall_create(&firewall()).is_ok());
        assert!(check_firewall_update(&firewall()).is_err());

        let no_outbound = Firewall {
            outbound_rules: Vec::new(),
            ..firewall()
        };
        assert!(check_firewall_create(&no_outbound).is_err());

        let with_id = Firewall {
            id: Some("bb4b2611".to_string()),
            ..firewall()
        };
        assert!(check_firewall_update(&with_id).is_ok());
    }

    #[test]
    fn test_check_tagging() {
        let resources = [Resource::new(ResourceType::Droplet, 42)];
        assert!(check_tagging("web", &resources, "tag").is_ok());
        assert_eq!(
            check_tagging("", &resources, "tag").unwrap_err().to_string(),
            "Missing required parameter - tag name."
        );
        assert_eq!(
            check_tagging("web", &[], "untag").unwrap_err().to_string(),
            "Missing required parameter - list of resources for untag."
        );
    }
}
