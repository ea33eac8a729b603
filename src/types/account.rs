//! Account resource.

use serde::Deserialize;

use super::common::RateLimit;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Warning,
    Locked,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Account {
    pub uuid: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub droplet_limit: Option<u32>,
    pub floating_ip_limit: Option<u32>,
    pub volume_limit: Option<u32>,
    pub status: Option<AccountStatus>,
    pub status_message: Option<String>,
    #[serde(rename = "ratelimit")]
    pub rate_limit: Option<RateLimit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_deserialization() {
        let account: Account = serde_json::from_value(json!({
            "droplet_limit": 25,
            "floating_ip_limit": 5,
            "email": "sammy@digitalocean.com",
            "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
            "email_verified": true,
            "status": "active",
            "status_message": ""
        }))
        .unwrap();

        assert_eq!(account.droplet_limit, Some(25));
        assert!(account.email_verified);
        assert_eq!(account.status, Some(AccountStatus::Active));
        assert!(account.rate_limit.is_none());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let account: Account = serde_json::from_value(json!({"status": "suspended"})).unwrap();
        assert_eq!(account.status, Some(AccountStatus::Unknown));
    }
}
