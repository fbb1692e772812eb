//! Nausf_UEAuthentication: 5G AKA and EAP based primary authentication.

use crate::core::dispatch::{
    self, DispatchOptions, OperationSpec, ResponseKind, ServiceResponse, ServiceState,
};
use crate::models::auth::{
    AuthenticationInfo, ConfirmationData, ConfirmationDataResponse, EapSession,
    UeAuthenticationCtx,
};
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;
use axum::routing::{post, put};
use axum::Router;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "nausf-auth";

pub const AUTHENTICATE: OperationSpec = OperationSpec {
    name: "UeAuthenticationsPost",
    method: Method::POST,
    path: "/ue-authentications",
    responses: &[
        ResponseKind::Created,
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

pub const CONFIRM_5G_AKA: OperationSpec = OperationSpec {
    name: "UeAuthenticationsAuthCtxId5gAkaConfirmationPut",
    method: Method::PUT,
    path: "/ue-authentications/{authCtxId}/5g-aka-confirmation",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

pub const EAP_SESSION: OperationSpec = OperationSpec {
    name: "EapAuthMethod",
    method: Method::POST,
    path: "/ue-authentications/{authCtxId}/eap-session",
    responses: &[
        ResponseKind::Success(StatusCode::OK),
        ResponseKind::TemporaryRedirect,
        ResponseKind::PermanentRedirect,
    ],
};

#[async_trait::async_trait]
pub trait UeAuthentication: CommonInterface {
    /// Start an authentication; answer 201 with the context and its
    /// `Location`.
    async fn authenticate(
        &self,
        request: AuthenticationInfo,
    ) -> ServiceResponse<UeAuthenticationCtx>;

    async fn confirm_5g_aka(
        &self,
        auth_ctx_id: String,
        request: ConfirmationData,
    ) -> ServiceResponse<ConfirmationDataResponse>;

    async fn eap_session(
        &self,
        auth_ctx_id: String,
        request: EapSession,
    ) -> ServiceResponse<EapSession>;
}

type AuthState = ServiceState<dyn UeAuthentication>;

pub fn routes(service: Arc<dyn UeAuthentication>, options: DispatchOptions) -> Router {
    let state = ServiceState::new(service, options);
    let base = format!("/{}/v1", SERVICE_NAME);
    Router::new()
        .route(&format!("{}{}", base, AUTHENTICATE.path), post(authenticate))
        .route(&format!("{}{}", base, CONFIRM_5G_AKA.path), put(confirm_5g_aka))
        .route(&format!("{}{}", base, EAP_SESSION.path), post(eap_session))
        .with_state(state)
}

async fn authenticate(State(state): State<AuthState>, body: Bytes) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &AUTHENTICATE, body, |request| {
        service.authenticate(request)
    })
    .await
}

async fn confirm_5g_aka(
    State(state): State<AuthState>,
    Path(auth_ctx_id): Path<String>,
    body: Bytes,
) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &CONFIRM_5G_AKA, body, move |request| {
        service.confirm_5g_aka(auth_ctx_id, request)
    })
    .await
}

async fn eap_session(
    State(state): State<AuthState>,
    Path(auth_ctx_id): Path<String>,
    body: Bytes,
) -> Response {
    let service = state.service.as_ref();
    dispatch::handle(service, state.options, &EAP_SESSION, body, move |request| {
        service.eap_session(auth_ctx_id, request)
    })
    .await
}
