use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, validation, ApiRequest};
use crate::types::{Droplet, Droplets, RequestStatus};

impl DigitalOceanClient {
    /// Lists droplets, one page at a time.
    ///
    /// `per_page` falls back to the configured default page size.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `page_no` is zero, or any
    /// other [`HttpError`] if the call fails.
    pub async fn get_available_droplets(
        &self,
        page_no: u32,
        per_page: Option<u32>,
    ) -> Result<Droplets, HttpError> {
        validation::check_page_no(page_no)?;

        let mut request = ApiRequest::new(actions::AVAILABLE_DROPLETS).page_no(page_no);
        if let Some(per_page) = per_page {
            request = request.per_page(per_page);
        }
        require_data(self.perform(request).await?)
    }

    /// Fetches one droplet.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `droplet_id` is zero, or any
    /// other [`HttpError`] if the call fails.
    pub async fn get_droplet_info(&self, droplet_id: u64) -> Result<Droplet, HttpError> {
        validation::check_id(droplet_id, "dropletId")?;

        let request = ApiRequest::new(actions::GET_DROPLET_INFO).path_param(droplet_id);
        require_data(self.perform(request).await?)
    }

    /// Creates a droplet.
    ///
    /// The name, region, size and image are required.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if a required attribute is
    /// missing, or any other [`HttpError`] if the call fails.
    pub async fn create_droplet(&self, droplet: &Droplet) -> Result<Droplet, HttpError> {
        validation::check_droplet_create(droplet)?;

        let request = ApiRequest::new(actions::CREATE_DROPLET).body(droplet);
        require_data(self.perform(request).await?)
    }

    /// Creates several identical droplets, one per entry of `names`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if a required attribute is
    /// missing or a single `name` is set, or any other [`HttpError`] if the
    /// call fails.
    pub async fn create_droplets(&self, droplet: &Droplet) -> Result<Droplets, HttpError> {
        validation::check_droplets_create(droplet)?;

        let request = ApiRequest::new(actions::CREATE_DROPLETS).body(droplet);
        require_data(self.perform(request).await?)
    }

    /// Deletes a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `droplet_id` is zero, or any
    /// other [`HttpError`] if the call fails.
    pub async fn delete_droplet(&self, droplet_id: u64) -> Result<RequestStatus, HttpError> {
        validation::check_id(droplet_id, "dropletId")?;

        let request = ApiRequest::new(actions::DELETE_DROPLET).path_param(droplet_id);
        require_data(self.perform(request).await?)
    }

    /// Deletes every droplet carrying `tag_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `tag_name` is blank, or any
    /// other [`HttpError`] if the call fails.
    pub async fn delete_droplet_by_tag_name(
        &self,
        tag_name: &str,
    ) -> Result<RequestStatus, HttpError> {
        validation::check_blank(tag_name, "tagName")?;

        let request =
            ApiRequest::new(actions::DELETE_DROPLET_BY_TAG_NAME).query_param("tag_name", tag_name);
        require_data(self.perform(request).await?)
    }
}
