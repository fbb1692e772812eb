#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request};
use axum::Router;
use fivegc_sdk::core::ServiceResponse;
use fivegc_sdk::models::auth::{
    AuthData, AuthResult, AuthType, AuthenticationInfo, Autn, Av5gAka, ConfirmationData,
    ConfirmationDataResponse, CounterSor, CounterUpu, EapSession, HxresStar, Links, Rand, SorInfo,
    SorMac, SorSecurityInfo, SupiOrSuci, UeAuthenticationCtx, UpuInfo, UpuMac, UpuSecurityInfo,
};
use fivegc_sdk::models::broadcast::{
    CipherRequestData, CipherResponseData, CipheringDataSet, CipheringKey, CipheringKeyInfo,
    CipheringSetId, ValidityDuration, C0,
};
use fivegc_sdk::models::common::{DateTime, Link, LinksValueSchema};
use fivegc_sdk::models::location::{
    CancelLocData, GeographicArea, GeographicalCoordinates, InputData, LocContextData,
    LocationData, PointUncertaintyCircle, Uncertainty,
};
use fivegc_sdk::models::network::{PlmnId, Tac, Tai};
use fivegc_sdk::services::nausf::{SorProtection, UeAuthentication, UpuProtection};
use fivegc_sdk::services::nlmf::{Broadcast, Location};
use fivegc_sdk::{CommonInterface, ProblemDetails, RedirectResponse, RequestError, StatusCode};
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tower::ServiceExt;

pub const ALT_LOCATION: &str = "https://alt.example/v1";
pub const CREATED_CTX_LOCATION: &str =
    "https://ausf.example/nausf-auth/v1/ue-authentications/ctx-1";
pub const TARGET_NF_ID: &str = "2ec8ac0b-265e-4165-86e9-e0735e6ce100";

/// What the fake business logic answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ok,
    NoContent,
    TemporaryRedirect,
    PermanentRedirect,
    Problem(StatusCode),
}

/// Scripted NF used by the route and lifecycle tests.
pub struct FakeNf {
    reply: Mutex<Reply>,
    /// Status the error mapping puts into its problem; `None` leaves it out.
    error_status: Option<i32>,
    pub errors: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
    pub last_path_parameter: Mutex<Option<String>>,
}

impl FakeNf {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            error_status: Some(400),
            errors: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            last_path_parameter: Mutex::new(None),
        }
    }

    pub fn with_error_status(mut self, status: Option<i32>) -> Self {
        self.error_status = status;
        self
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    fn answer<T>(&self, payload: impl FnOnce() -> T) -> ServiceResponse<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let redirect = || RedirectResponse::to(ALT_LOCATION).with_target_nf_id(TARGET_NF_ID);
        match self.reply.lock().unwrap().clone() {
            Reply::Ok => ServiceResponse::ok(payload()),
            Reply::NoContent => ServiceResponse::no_content(),
            Reply::TemporaryRedirect => ServiceResponse::temporary_redirect(redirect()),
            Reply::PermanentRedirect => ServiceResponse::permanent_redirect(redirect()),
            Reply::Problem(status) => ServiceResponse::problem(
                ProblemDetails::new(status).with_cause("SCRIPTED_FAILURE"),
            ),
        }
    }

    fn remember(&self, value: &str) {
        *self.last_path_parameter.lock().unwrap() = Some(value.to_string());
    }
}

impl CommonInterface for FakeNf {
    fn error(&self, err: &RequestError) -> ProblemDetails {
        self.errors.lock().unwrap().push(err.to_string());
        let mut problem = match err {
            RequestError::Validation(errors) => ProblemDetails::from_validation(errors),
            RequestError::Decode(e) => ProblemDetails::from_decode(e),
            other => ProblemDetails::default()
                .with_title("Bad Request")
                .with_detail(other.to_string()),
        };
        problem.status = self.error_status;
        problem
    }
}

#[async_trait::async_trait]
impl Broadcast for FakeNf {
    async fn ciphering_key_data(
        &self,
        _request: CipherRequestData,
    ) -> ServiceResponse<CipherResponseData> {
        self.answer(cipher_response)
    }
}

#[async_trait::async_trait]
impl Location for FakeNf {
    async fn cancel_location(&self, _request: CancelLocData) -> ServiceResponse<()> {
        self.answer(|| ())
    }

    async fn determine_location(&self, _request: InputData) -> ServiceResponse<LocationData> {
        self.answer(location_data)
    }

    async fn location_context_transfer(&self, _request: LocContextData) -> ServiceResponse<()> {
        self.answer(|| ())
    }
}

#[async_trait::async_trait]
impl UeAuthentication for FakeNf {
    async fn authenticate(
        &self,
        _request: AuthenticationInfo,
    ) -> ServiceResponse<UeAuthenticationCtx> {
        if *self.reply.lock().unwrap() == Reply::Ok {
            self.calls.fetch_add(1, Ordering::SeqCst);
            return ServiceResponse::created(ue_authentication_ctx(), CREATED_CTX_LOCATION);
        }
        self.answer(ue_authentication_ctx)
    }

    async fn confirm_5g_aka(
        &self,
        auth_ctx_id: String,
        _request: ConfirmationData,
    ) -> ServiceResponse<ConfirmationDataResponse> {
        self.remember(&auth_ctx_id);
        self.answer(|| ConfirmationDataResponse {
            auth_result: AuthResult::Success,
            supi: None,
            kseaf: None,
        })
    }

    async fn eap_session(
        &self,
        auth_ctx_id: String,
        request: EapSession,
    ) -> ServiceResponse<EapSession> {
        self.remember(&auth_ctx_id);
        self.answer(|| EapSession {
            auth_result: Some(AuthResult::Ongoing),
            ..request
        })
    }
}

#[async_trait::async_trait]
impl SorProtection for FakeNf {
    async fn ue_sor(
        &self,
        supi_or_suci: SupiOrSuci,
        _request: SorInfo,
    ) -> ServiceResponse<SorSecurityInfo> {
        self.remember(supi_or_suci.as_str());
        self.answer(|| SorSecurityInfo {
            sor_mac_iausf: SorMac::from("0123456789abcdef0123456789abcdef"),
            counter_sor: CounterSor::from("0001"),
            sor_xmac_iue: None,
        })
    }
}

#[async_trait::async_trait]
impl UpuProtection for FakeNf {
    async fn ue_upu(
        &self,
        supi_or_suci: SupiOrSuci,
        _request: UpuInfo,
    ) -> ServiceResponse<UpuSecurityInfo> {
        self.remember(supi_or_suci.as_str());
        self.answer(|| UpuSecurityInfo {
            upu_mac_iausf: UpuMac::from("fedcba9876543210fedcba9876543210"),
            counter_upu: CounterUpu::from("0002"),
            upu_xmac_iue: None,
        })
    }
}

pub fn tai() -> Tai {
    Tai {
        plmn_id: PlmnId::new("208", "93"),
        tac: Tac::from("000001"),
        nid: None,
    }
}

pub fn cipher_request() -> CipherRequestData {
    CipherRequestData {
        tai_list: vec![tai()],
        supported_features: None,
    }
}

pub fn cipher_response() -> CipherResponseData {
    CipherResponseData {
        ciphering_key_info: vec![CipheringKeyInfo {
            ciphering_data_set: vec![CipheringDataSet {
                ciphering_set_id: CipheringSetId(7),
                ciphering_key: CipheringKey::from("00112233445566778899aabbccddeeff"),
                c0: C0::from("ffeeddccbbaa99887766554433221100"),
                lte_pos_sib_types: None,
                nr_pos_sib_types: None,
                validity_start_time: DateTime::from("2024-05-01T10:00:00Z"),
                validity_duration: ValidityDuration(120),
            }],
            tai_list: vec![tai()],
        }],
        supported_features: None,
    }
}

pub fn location_data() -> LocationData {
    LocationData::new(GeographicArea::PointUncertaintyCircle(PointUncertaintyCircle {
        point: GeographicalCoordinates {
            lon: 2.2945,
            lat: 48.8584,
        },
        uncertainty: Uncertainty(15.0),
    }))
}

pub fn ue_authentication_ctx() -> UeAuthenticationCtx {
    let mut links = Links::new();
    links.insert(
        "5g-aka".to_string(),
        LinksValueSchema::Link(Link {
            href: "/nausf-auth/v1/ue-authentications/ctx-1/5g-aka-confirmation".into(),
        }),
    );
    UeAuthenticationCtx {
        auth_type: AuthType::FiveGAka,
        five_g_auth_data: AuthData::Av5gAka(Av5gAka {
            rand: Rand::from("0123456789abcdef0123456789abcdef"),
            hxres_star: HxresStar::from("0123456789abcdef0123456789abcdef"),
            autn: Autn::from("0123456789abcdef0123456789abcdef"),
        }),
        links,
        serving_network_name: None,
    }
}

/// Status, headers and body of one request sent through `router`.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> (axum::http::StatusCode, HeaderMap, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

pub async fn post(router: Router, uri: &str, body: impl Into<String>) -> (axum::http::StatusCode, HeaderMap, Bytes) {
    send(router, Method::POST, uri, body).await
}
