use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, validation, ApiRequest};
use crate::types::{RequestStatus, Resource, Resources};

impl DigitalOceanClient {
    /// Applies a tag to the given resources.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `tag_name` is blank or
    /// `resources` is empty, or any other [`HttpError`] if the call fails.
    pub async fn tag_resources(
        &self,
        tag_name: &str,
        resources: Vec<Resource>,
    ) -> Result<RequestStatus, HttpError> {
        validation::check_tagging(tag_name, &resources, "tag")?;

        let request = ApiRequest::new(actions::TAG_RESOURCE)
            .path_param(tag_name)
            .body(&Resources { resources });
        require_data(self.perform(request).await?)
    }

    /// Removes a tag from the given resources.
    ///
    /// The resource list travels in the body of a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if `tag_name` is blank or
    /// `resources` is empty, or any other [`HttpError`] if the call fails.
    pub async fn untag_resources(
        &self,
        tag_name: &str,
        resources: Vec<Resource>,
    ) -> Result<RequestStatus, HttpError> {
        validation::check_tagging(tag_name, &resources, "untag")?;

        let request = ApiRequest::new(actions::UNTAG_RESOURCE)
            .path_param(tag_name)
            .body(&Resources { resources });
        require_data(self.perform(request).await?)
    }
}
