mod common;

use axum::http::StatusCode;
use common::*;
use fivegc_sdk::core::server::mount;
use fivegc_sdk::services::nlmf::{broadcast, location, NlmfServer};
use fivegc_sdk::DispatchOptions;
use serde_json::{json, Value};
use std::sync::Arc;

const CIPHER_KEY_DATA: &str = "/nlmf-broadcast/v1/cipher-key-data";
const DETERMINE_LOCATION: &str = "/nlmf-loc/v1/determine-location";
const CANCEL_LOCATION: &str = "/nlmf-loc/v1/cancel-location";
const LOCATION_CONTEXT_TRANSFER: &str = "/nlmf-loc/v1/location-context-transfer";

fn cipher_request_body() -> String {
    json!({
        "taiList": [{"plmnId": {"mcc": "208", "mnc": "93"}, "tac": "000001"}]
    })
    .to_string()
}

fn input_data_body() -> String {
    json!({
        "externalClientType": "EMERGENCY_SERVICES",
        "locationQoS": {"hAccuracy": 50.0, "responseTime": "LOW_DELAY"}
    })
    .to_string()
}

#[tokio::test]
async fn test_cipher_key_data_success_has_no_redirect_headers() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let app = broadcast::routes(nf.clone(), DispatchOptions::default());

    let (status, headers, body) = post(app, CIPHER_KEY_DATA, cipher_request_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");
    assert!(headers.get("location").is_none());
    assert!(headers.get("3gpp-sbi-target-nf-id").is_none());

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, serde_json::to_value(cipher_response()).unwrap());
    assert_eq!(body["cipheringKeyInfo"][0]["cipheringDataSet"][0]["cipheringSetID"], 7);
    assert_eq!(nf.call_count(), 1);
    assert_eq!(nf.error_count(), 0);
}

#[tokio::test]
async fn test_determine_location_temporary_redirect() {
    let nf = Arc::new(FakeNf::new(Reply::TemporaryRedirect));
    let app = location::routes(nf.clone(), DispatchOptions::default());

    let (status, headers, body) = post(app, DETERMINE_LOCATION, input_data_body()).await;

    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers["location"], ALT_LOCATION);
    assert_eq!(headers["3gpp-sbi-target-nf-id"], TARGET_NF_ID);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["redirectHeader"]["Location"], ALT_LOCATION);
    assert_eq!(body["redirectHeader"]["3gpp-Sbi-Target-Nf-Id"], TARGET_NF_ID);
}

#[tokio::test]
async fn test_determine_location_permanent_redirect() {
    let nf = Arc::new(FakeNf::new(Reply::PermanentRedirect));
    let app = location::routes(nf, DispatchOptions::default());

    let (status, headers, _) = post(app, DETERMINE_LOCATION, input_data_body()).await;

    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(headers["location"], ALT_LOCATION);
}

#[tokio::test]
async fn test_determine_location_success_body() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let app = location::routes(nf, DispatchOptions::default());

    let (status, _, body) = post(app, DETERMINE_LOCATION, input_data_body()).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["locationEstimate"]["shape"], "POINT_UNCERTAINTY_CIRCLE");
    assert_eq!(body["locationEstimate"]["uncertainty"], 15.0);
}

#[tokio::test]
async fn test_cancel_location_no_content_has_empty_body() {
    let nf = Arc::new(FakeNf::new(Reply::NoContent));
    let app = location::routes(nf.clone(), DispatchOptions::default());
    let request = json!({
        "hgmlcCallBackURI": "https://gmlc.example/callback",
        "ldrReference": "ldr-1"
    });

    let (status, _, body) = post(app, CANCEL_LOCATION, request.to_string()).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(nf.call_count(), 1);
}

#[tokio::test]
async fn test_location_context_transfer_no_content() {
    let nf = Arc::new(FakeNf::new(Reply::NoContent));
    let app = location::routes(nf, DispatchOptions::default());
    let request = json!({
        "amfId": "2ec8ac0b-265e-4165-86e9-e0735e6ce100",
        "hgmlcCallBackURI": "https://gmlc.example/callback",
        "ldrReference": "ldr-1",
        "ldrType": "PERIODIC",
        "periodicEventInfo": {"reportingAmount": 10, "reportingInterval": 60}
    });

    let (status, _, _) = post(app, LOCATION_CONTEXT_TRANSFER, request.to_string()).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_malformed_json_goes_through_error_mapping() {
    let nf = Arc::new(FakeNf::new(Reply::Ok).with_error_status(Some(422)));
    let app = broadcast::routes(nf.clone(), DispatchOptions::default());

    let (status, headers, body) = post(app, CIPHER_KEY_DATA, "{\"taiList\": [").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(headers["content-type"], "application/problem+json");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], 422);
    assert_eq!(nf.call_count(), 0);
    assert_eq!(nf.error_count(), 1);
    assert!(nf.errors.lock().unwrap()[0].contains("malformed request body"));
}

#[tokio::test]
async fn test_problem_without_status_answers_bad_request() {
    let nf = Arc::new(FakeNf::new(Reply::Ok).with_error_status(None));
    let app = broadcast::routes(nf, DispatchOptions::default());

    let (status, _, _) = post(app, CIPHER_KEY_DATA, "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_body_rejected_before_business_logic() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let app = broadcast::routes(nf.clone(), DispatchOptions::default());
    let request = json!({
        "taiList": [{"plmnId": {"mcc": "20", "mnc": "93"}, "tac": "000001"}]
    });

    let (status, _, body) = post(app, CIPHER_KEY_DATA, request.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["invalidParams"][0]["param"], "taiList[0].plmnId.mcc");
    assert_eq!(nf.call_count(), 0);
}

#[tokio::test]
async fn test_validation_can_be_disabled() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let options = DispatchOptions {
        validate_requests: false,
    };
    let app = broadcast::routes(nf.clone(), options);
    let request = json!({
        "taiList": [{"plmnId": {"mcc": "20", "mnc": "93"}, "tac": "000001"}]
    });

    let (status, _, _) = post(app, CIPHER_KEY_DATA, request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(nf.call_count(), 1);
    assert_eq!(nf.error_count(), 0);
}

#[tokio::test]
async fn test_business_problem_status_is_used() {
    let nf = Arc::new(FakeNf::new(Reply::Problem(fivegc_sdk::StatusCode::FORBIDDEN)));
    let app = location::routes(nf, DispatchOptions::default());

    let (status, headers, body) = post(app, DETERMINE_LOCATION, input_data_body()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(headers["content-type"], "application/problem+json");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["cause"], "SCRIPTED_FAILURE");
}

#[tokio::test]
async fn test_undeclared_success_status_becomes_problem() {
    // CancelLocation declares no 200.
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let app = location::routes(nf, DispatchOptions::default());
    let request = json!({
        "hgmlcCallBackURI": "https://gmlc.example/callback",
        "ldrReference": "ldr-1"
    });

    let (status, headers, body) = post(app, CANCEL_LOCATION, request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/problem+json");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], 200);
}

#[tokio::test]
async fn test_routes_mounted_under_api_root() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));

    let app = mount("/v1", broadcast::routes(nf.clone(), DispatchOptions::default()));
    let (status, _, _) = post(app, "/v1/nlmf-broadcast/v1/cipher-key-data", cipher_request_body()).await;
    assert_eq!(status, StatusCode::OK);

    let app = mount("/v1", broadcast::routes(nf, DispatchOptions::default()));
    let (status, _, _) = post(app, CIPHER_KEY_DATA, cipher_request_body()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nlmf_server_router_hosts_both_services() {
    let nf = Arc::new(FakeNf::new(Reply::NoContent));
    let mut server = NlmfServer::new("127.0.0.1:0", "", DispatchOptions::default());
    server.attach_broadcast(nf.clone()).attach_location(nf.clone());

    let (status, _, _) = post(server.router(), DETERMINE_LOCATION, input_data_body()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    nf.set_reply(Reply::Ok);
    let (status, _, _) = post(server.router(), CIPHER_KEY_DATA, cipher_request_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nf.call_count(), 2);
}
