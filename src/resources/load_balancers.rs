use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, validation, ApiRequest};
use crate::types::LoadBalancer;

impl DigitalOceanClient {
    /// Creates a load balancer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if the name or region is missing,
    /// no forwarding rule is given, or a rule or the health check is
    /// incomplete. Returns any other [`HttpError`] if the call fails.
    pub async fn create_load_balancer(
        &self,
        load_balancer: &LoadBalancer,
    ) -> Result<LoadBalancer, HttpError> {
        validation::check_load_balancer_create(load_balancer)?;

        let request = ApiRequest::new(actions::CREATE_LOAD_BALANCER).body(load_balancer);
        require_data(self.perform(request).await?)
    }

    /// Replaces the configuration of an existing load balancer.
    ///
    /// # Errors
    ///
    /// Same as [`create_load_balancer`](Self::create_load_balancer), and the
    /// `id` must also be set.
    pub async fn update_load_balancer(
        &self,
        load_balancer: &LoadBalancer,
    ) -> Result<LoadBalancer, HttpError> {
        validation::check_load_balancer_update(load_balancer)?;

        let id = load_balancer.id.as_deref().unwrap_or_default();
        let request = ApiRequest::new(actions::UPDATE_LOAD_BALANCER)
            .path_param(id)
            .body(load_balancer);
        require_data(self.perform(request).await?)
    }
}
