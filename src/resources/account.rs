use super::require_data;
use crate::clients::{DigitalOceanClient, HttpError};
use crate::rest::{actions, ApiRequest};
use crate::types::Account;

impl DigitalOceanClient {
    /// Fetches the account the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the call fails or the payload cannot be
    /// decoded.
    pub async fn get_account_info(&self) -> Result<Account, HttpError> {
        let response = self
            .perform(ApiRequest::new(actions::GET_ACCOUNT_INFO))
            .await?;
        require_data(response)
    }
}
