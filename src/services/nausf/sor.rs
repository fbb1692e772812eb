//! Nausf_SoRProtection: integrity protection of Steering of Roaming data.

use crate::core::dispatch::{
    self, DispatchOptions, OperationSpec, ResponseKind, ServiceResponse, ServiceState,
};
use crate::models::auth::{SupiOrSuci, SorInfo, SorSecurityInfo};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "nausf-sorprotection";

pub const UE_SOR: OperationSpec = OperationSpec {
    name: "SupiUeSorPost",
    method: Method::POST,
    path: "/{supiOrSuci}/ue-sor",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

#[async_trait::async_trait]
pub trait SorProtection: CommonInterface {
    /// Protect the steering information sent to the UE.
    async fn ue_sor(
        &self,
        supi_or_suci: SupiOrSuci,
        request: SorInfo,
    ) -> ServiceResponse<SorSecurityInfo>;
}

pub fn routes(service: Arc<dyn SorProtection>, options: DispatchOptions) -> Router {
    let state = ServiceState::new(service, options);
    Router::new()
        .route(&format!("/{}/v1{}", SERVICE_NAME, UE_SOR.path), post(ue_sor))
        .with_state(state)
}

async fn ue_sor(
    State(state): State<ServiceState<dyn SorProtection>>,
    Path(supi_or_suci): Path<String>,
    body: Bytes,
) -> Response {
    let service = state.service.as_ref();
    let supi_or_suci = SupiOrSuci::from(supi_or_suci);
    if state.options.validate_requests {
        if let Err(err) = dispatch::check_path_parameter("supiOrSuci", &supi_or_suci) {
            return dispatch::reject(service, &UE_SOR, err);
        }
    }
    dispatch::handle(service, state.options, &UE_SOR, body, move |request| {
        service.ue_sor(supi_or_suci, request)
    })
    .await
}
