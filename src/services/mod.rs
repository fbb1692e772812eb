//! Service contracts of the hosted NF services and the routes that bind them
//! to HTTP.

pub mod nausf;
pub mod nlmf;

use crate::models::common::ProblemDetails;
use crate::utils::error::RequestError;

/// Error mapping shared by every service contract.
///
/// Called when a request body cannot be decoded, fails validation, or a
/// path parameter is invalid. The response is sent with the status the
/// returned problem carries, 400 when it carries none.
pub trait CommonInterface: Send + Sync {
    fn error(&self, err: &RequestError) -> ProblemDetails;
}
