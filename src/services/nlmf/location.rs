//! Nlmf_Location: determine, cancel and transfer location requests.

use crate::core::dispatch::{
    self, DispatchOptions, OperationSpec, ResponseKind, ServiceResponse, ServiceState,
};
use crate::models::location::{CancelLocData, InputData, LocContextData, LocationData};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "nlmf-loc";

pub const CANCEL_LOCATION: OperationSpec = OperationSpec {
    name: "CancelLocation",
    method: Method::POST,
    path: "/cancel-location",
    responses: &[
        ResponseKind::NoContent,
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

pub const DETERMINE_LOCATION: OperationSpec = OperationSpec {
    name: "DetermineLocation",
    method: Method::POST,
    path: "/determine-location",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::NoContent,
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

pub const LOCATION_CONTEXT_TRANSFER: OperationSpec = OperationSpec {
    name: "LocationContextTransfer",
    method: Method::POST,
    path: "/location-context-transfer",
    responses: &[
        ResponseKind::NoContent,
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

#[async_trait::async_trait]
pub trait Location: CommonInterface {
    async fn cancel_location(&self, request: CancelLocData) -> ServiceResponse<()>;

    async fn determine_location(&self, request: InputData) -> ServiceResponse<LocationData>;

    async fn location_context_transfer(&self, request: LocContextData) -> ServiceResponse<()>;
}

type LocationState = ServiceState<dyn Location>;

/// Routes of the Nlmf_Location service, relative to the API root.
pub fn routes(service: Arc<dyn Location>, options: DispatchOptions) -> Router {
    let state = ServiceState::new(service, options);
    let base = format!("/{}/v1", SERVICE_NAME);
    Router::new()
        .route(&format!("{}{}", base, CANCEL_LOCATION.path), post(cancel_location))
        .route(&format!("{}{}", base, DETERMINE_LOCATION.path), post(determine_location))
        .route(
            &format!("{}{}", base, LOCATION_CONTEXT_TRANSFER.path),
            post(location_context_transfer),
        )
        .with_state(state)
}

async fn cancel_location(State(state): State<LocationState>, body: Bytes) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &CANCEL_LOCATION, body, |request| {
        service.cancel_location(request)
    })
    .await
}

async fn determine_location(State(state): State<LocationState>, body: Bytes) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &DETERMINE_LOCATION, body, |request| {
        service.determine_location(request)
    })
    .await
}

async fn location_context_transfer(State(state): State<LocationState>, body: Bytes) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(
        service,
        state.options,
        &LOCATION_CONTEXT_TRANSFER,
        body,
        |request| service.location_context_transfer(request),
    )
    .await
}
