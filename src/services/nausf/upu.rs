//! Nausf_UPUProtection: integrity protection of UE Parameters Update data.

use crate::core::dispatch::{
    self, DispatchOptions, OperationSpec, ResponseKind, ServiceResponse, ServiceState,
};
use crate::models::auth::{SupiOrSuci, UpuInfo, UpuSecurityInfo};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "nausf-upuprotection";

pub const UE_UPU: OperationSpec = OperationSpec {
    name: "SupiUeUpuPost",
    method: Method::POST,
    path: "/{supiOrSuci}/ue-upu",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

#[async_trait::async_trait]
pub trait UpuProtection: CommonInterface {
    /// Protect the UE parameters update sent to the UE.
    async fn ue_upu(
        &self,
        supi_or_suci: SupiOrSuci,
        request: UpuInfo,
    ) -> ServiceResponse<UpuSecurityInfo>;
}

pub fn routes(service: Arc<dyn UpuProtection>, options: DispatchOptions) -> Router {
    let state = ServiceState::new(service, options);
    Router::new()
        .route(&format!("/{}/v1{}", SERVICE_NAME, UE_UPU.path), post(ue_upu))
        .with_state(state)
}

async fn ue_upu(
    State(state): State<ServiceState<dyn UpuProtection>>,
    Path(supi_or_suci): Path<String>,
    body: Bytes,
) -> Response {
    let service = state.service.as_ref();
    let supi_or_suci = SupiOrSuci::from(supi_or_suci);
    if state.options.validate_requests {
        if let Err(err) = dispatch::check_path_parameter("supiOrSuci", &supi_or_suci) {
            return dispatch::reject(service, &UE_UPU, err);
        }
    }
    dispatch::handle(service, state.options, &UE_UPU, body, move |request| {
        service.ue_upu(supi_or_suci, request)
    })
    .await
}
