//! Location Management Function services (TS 29.572).

pub mod broadcast;
pub mod client;
pub mod location;
pub mod server;

pub use broadcast::Broadcast;
pub use client::{BroadcastClient, LocationClient, NlmfClient};
pub use location::Location;
pub use server::NlmfServer;

use crate::core::dispatch::ServiceResponse;
use crate::models::broadcast::{CipherRequestData, CipherResponseData};
use crate::models::common::ProblemDetails;
use crate::models::location::{CancelLocData, InputData, LocContextData, LocationData};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use crate::utils::error::RequestError;

/// Placeholder implementation answering every operation with 501 and
/// mapping request failures to 400 problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl Unimplemented {
    fn not_implemented<T>(operation: &str) -> ServiceResponse<T> {
        ServiceResponse::problem(
            ProblemDetails::new(StatusCode::NOT_IMPLEMENTED)
                .with_detail(format!("{} is not implemented by this NF", operation)),
        )
    }
}

impl CommonInterface for Unimplemented {
    fn error(&self, err: &RequestError) -> ProblemDetails {
        match err {
            RequestError::Validation(errors) => ProblemDetails::from_validation(errors),
            RequestError::PathParameter { errors, .. } => ProblemDetails::from_validation(errors)
                .with_detail(err.to_string()),
            RequestError::Decode(e) => ProblemDetails::from_decode(e),
        }
    }
}

#[async_trait::async_trait]
impl Broadcast for Unimplemented {
    async fn ciphering_key_data(
        &self,
        _request: CipherRequestData,
    ) -> ServiceResponse<CipherResponseData> {
        Self::not_implemented("CipheringKeyData")
    }
}

#[async_trait::async_trait]
impl Location for Unimplemented {
    async fn cancel_location(&self, _request: CancelLocData) -> ServiceResponse<()> {
        Self::not_implemented("CancelLocation")
    }

    async fn determine_location(&self, _request: InputData) -> ServiceResponse<LocationData> {
        Self::not_implemented("DetermineLocation")
    }

    async fn location_context_transfer(&self, _request: LocContextData) -> ServiceResponse<()> {
        Self::not_implemented("LocationContextTransfer")
    }
}
