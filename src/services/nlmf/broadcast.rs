//! Nlmf_Broadcast: ciphering keys for broadcast assistance data.

use crate::core::dispatch::{
    self, DispatchOptions, OperationSpec, ResponseKind, ServiceResponse, ServiceState,
};
use crate::models::broadcast::{CipherRequestData, CipherResponseData};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "nlmf-broadcast";

pub const CIPHERING_KEY_DATA: OperationSpec = OperationSpec {
    name: "CipheringKeyData",
    method: Method::POST,
    path: "/cipher-key-data",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

#[async_trait::async_trait]
pub trait Broadcast: CommonInterface {
    async fn ciphering_key_data(
        &self,
        request: CipherRequestData,
    ) -> ServiceResponse<CipherResponseData>;
}

pub fn routes(service: Arc<dyn Broadcast>, options: DispatchOptions) -> Router {
    let state = ServiceState::new(service, options);
    Router::new()
        .route(
            &format!("/{}/v1{}", SERVICE_NAME, CIPHERING_KEY_DATA.path),
            post(ciphering_key_data),
        )
        .with_state(state)
}

async fn ciphering_key_data(
    State(state): State<ServiceState<dyn Broadcast>>,
    body: Bytes,
) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &CIPHERING_KEY_DATA, body, |request| {
        service.ciphering_key_data(request)
    })
    .await
}
