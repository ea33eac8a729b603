use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, validation, ApiRequest};
use crate::types::{RequestStatus, Volume, Volumes};

impl DigitalOceanClient {
    /// Lists the volumes in a region.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `region_slug` is blank, or any
    /// other [`HttpError`] if the call fails.
    pub async fn get_available_volumes(&self, region_slug: &str) -> Result<Volumes, HttpError> {
        validation::check_blank(region_slug, "regionSlug")?;

        let request = ApiRequest::new(actions::AVAILABLE_VOLUMES).query_param("region", region_slug);
        require_data(self.perform(request).await?)
    }

    /// Creates a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if the name, region or size is
    /// missing, or any other [`HttpError`] if the call fails.
    pub async fn create_volume(&self, volume: &Volume) -> Result<Volume, HttpError> {
        validation::check_volume_create(volume)?;

        let request = ApiRequest::new(actions::CREATE_VOLUME).body(volume);
        require_data(self.perform(request).await?)
    }

    /// Deletes a volume.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `volume_id` is blank, or any
    /// other [`HttpError`] if the call fails.
    pub async fn delete_volume(&self, volume_id: &str) -> Result<RequestStatus, HttpError> {
        validation::check_blank(volume_id, "volumeId")?;

        let request = ApiRequest::new(actions::DELETE_VOLUME).path_param(volume_id);
        require_data(self.perform(request).await?)
    }
}
