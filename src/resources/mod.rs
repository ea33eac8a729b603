//! Typed operations on [`DigitalOceanClient`](crate::DigitalOceanClient).
//!
//! Each operation checks its preconditions, builds an
//! [`ApiRequest`](crate::rest::ApiRequest) from the action catalog, runs it
//! through [`DigitalOceanClient::perform`](crate::DigitalOceanClient::perform) and converts the response into a
//! `Result`.
//!
//! | Area            | Operations |
//! |-----------------|------------|
//! | Account         | `get_account_info` |
//! | Droplets        | `get_available_droplets`, `get_droplet_info`, `create_droplet`, `create_droplets`, `delete_droplet`, `delete_droplet_by_tag_name` |
//! | Volumes         | `get_available_volumes`, `create_volume`, `delete_volume` |
//! | Load balancers  | `create_load_balancer`, `update_load_balancer` |
//! | Firewalls       | `create_firewall`, `update_firewall` |
//! | Tags            | `tag_resources`, `untag_resources` |

mod account;
mod droplets;
mod firewalls;
mod load_balancers;
mod tags;
mod volumes;

use crate::clients::{EnvelopeDecodeError, HttpError};
use crate::rest::ApiResponse;

/// Converts a response into its payload, treating an absent payload as a
/// decode failure.
fn require_data<T>(response: ApiResponse<T>) -> Result<T, HttpError> {
    let element_name = response.action().element_name;
    response.into_result()?.ok_or_else(|| {
        HttpError::EnvelopeDecodeFailed(EnvelopeDecodeError {
            element_name,
            reason: "response carried no payload".to_string(),
        })
    })
}
