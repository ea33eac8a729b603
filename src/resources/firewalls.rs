use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, validation, ApiRequest};
use crate::types::Firewall;

impl DigitalOceanClient {
    /// Creates a cloud firewall.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if the name, inbound rules or
    /// outbound rules are missing, or any other [`HttpError`] if the call
    /// fails.
    pub async fn create_firewall(&self, firewall: &Firewall) -> Result<Firewall, HttpError> {
        validation::check_firewall_create(firewall)?;

        let request = ApiRequest::new(actions::CREATE_FIREWALL).body(firewall);
        require_data(self.perform(request).await?)
    }

    /// Replaces the rules of an existing firewall.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if the id, name, inbound rules or
    /// outbound rules are missing, or any other [`HttpError`] if the call
    /// fails.
    pub async fn update_firewall(&self, firewall: &Firewall) -> Result<Firewall, HttpError> {
        validation::check_firewall_update(firewall)?;

        let id = firewall.id.as_deref().unwrap_or_default();
        let request = ApiRequest::new(actions::UPDATE_FIREWALL)
            .path_param(id)
            .body(firewall);
        require_data(self.perform(request).await?)
    }
}
