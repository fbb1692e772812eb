mod common;

use common::*;
use fivegc_sdk::core::{ApiResponse, ClientConfiguration, SbiClient, ServerConfiguration, ServerVariable};
use fivegc_sdk::models::auth::{AuthResult, ConfirmationData, ResStar, SorInfo};
use fivegc_sdk::models::location::{CancelLocData, ExternalClientType, InputData};
use fivegc_sdk::services::nausf::{auth, NausfClient};
use fivegc_sdk::services::nlmf::{BroadcastClient, LocationClient};
use fivegc_sdk::{SdkError, StatusCode};
use httpmock::prelude::*;
use serde_json::json;

fn config_for(server: &MockServer) -> ClientConfiguration {
    ClientConfiguration::for_host("http", server.address().to_string())
}

#[tokio::test]
async fn test_ciphering_key_data_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nlmf-broadcast/v1/cipher-key-data")
            .header("content-type", "application/json")
            .json_body(serde_json::to_value(cipher_request()).unwrap());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::to_value(cipher_response()).unwrap());
    });

    let client = BroadcastClient::new(config_for(&server)).unwrap();
    let response = client.ciphering_key_data(&cipher_request()).await.unwrap();

    api_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.into_body(), Some(cipher_response()));
}

#[tokio::test]
async fn test_determine_location_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nlmf-loc/v1/determine-location")
            .json_body(json!({"externalClientType": "VALUE_ADDED_SERVICES"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::to_value(location_data()).unwrap());
    });

    let client = LocationClient::new(config_for(&server)).unwrap();
    let request = InputData::new(ExternalClientType::ValueAddedServices);
    let response = client.determine_location(&request).await.unwrap();

    api_mock.assert();
    match response {
        ApiResponse::Success { status, body } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, location_data());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_location_no_content() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/nlmf-loc/v1/cancel-location");
        then.status(204);
    });

    let client = LocationClient::new(config_for(&server)).unwrap();
    let request = CancelLocData {
        hgmlc_call_back_uri: "https://gmlc.example/callback".into(),
        ldr_reference: "ldr-1".into(),
        serving_lmf_identification: None,
        supported_features: None,
    };
    let response = client.cancel_location(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(response, ApiResponse::NoContent);
}

#[tokio::test]
async fn test_redirect_headers_folded_into_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/nlmf-loc/v1/determine-location");
        then.status(307)
            .header("Location", ALT_LOCATION)
            .header("3gpp-Sbi-Target-Nf-Id", TARGET_NF_ID)
            .header("Content-Type", "application/json")
            .json_body(json!({"cause": "NF_INSTANCE_MOVED"}));
    });

    let client = LocationClient::new(config_for(&server)).unwrap();
    let request = InputData::new(ExternalClientType::EmergencyServices);
    let response = client.determine_location(&request).await.unwrap();

    // The client must not follow the redirect on its own.
    api_mock.assert_hits(1);
    match response {
        ApiResponse::Redirect { status, redirect } => {
            assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
            assert_eq!(redirect.redirect_header.location.as_deref(), Some(ALT_LOCATION));
            assert_eq!(
                redirect.redirect_header.target_nf_id.as_deref(),
                Some(TARGET_NF_ID)
            );
            assert_eq!(redirect.cause.as_deref(), Some("NF_INSTANCE_MOVED"));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_permanent_redirect_without_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nlmf-broadcast/v1/cipher-key-data");
        then.status(308).header("Location", ALT_LOCATION);
    });

    let client = BroadcastClient::new(config_for(&server)).unwrap();
    let response = client.ciphering_key_data(&cipher_request()).await.unwrap();

    match response {
        ApiResponse::Redirect { status, redirect } => {
            assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
            assert_eq!(redirect.redirect_header.location.as_deref(), Some(ALT_LOCATION));
            assert!(redirect.redirect_header.target_nf_id.is_none());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_redirect_body_header_kept_without_http_headers() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nlmf-loc/v1/determine-location");
        then.status(307)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "redirectHeader": {
                    "Location": ALT_LOCATION,
                    "3gpp-Sbi-Target-Nf-Id": TARGET_NF_ID
                }
            }));
    });

    let client = LocationClient::new(config_for(&server)).unwrap();
    let request = InputData::new(ExternalClientType::EmergencyServices);
    let response = client.determine_location(&request).await.unwrap();

    match response {
        ApiResponse::Redirect { redirect, .. } => {
            assert_eq!(redirect.redirect_header.location.as_deref(), Some(ALT_LOCATION));
            assert_eq!(
                redirect.redirect_header.target_nf_id.as_deref(),
                Some(TARGET_NF_ID)
            );
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_problem_details_decoded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT)
            .path("/nausf-auth/v1/ue-authentications/ctx-9/5g-aka-confirmation");
        then.status(404)
            .header("Content-Type", "application/problem+json")
            .json_body(json!({"status": 404, "cause": "CONTEXT_NOT_FOUND"}));
    });

    let client = NausfClient::new(config_for(&server)).unwrap();
    let request = ConfirmationData {
        res_star: ResStar::from("0123456789abcdef0123456789abcdef").into(),
        supported_features: None,
    };
    let response = client.ue_authentication.confirm_5g_aka("ctx-9", &request).await.unwrap();

    match response {
        ApiResponse::Problem { status, details } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(details.cause.as_deref(), Some("CONTEXT_NOT_FOUND"));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_problem_with_unreadable_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nlmf-broadcast/v1/cipher-key-data");
        then.status(503).body("upstream unavailable");
    });

    let client = BroadcastClient::new(config_for(&server)).unwrap();
    let response = client.ciphering_key_data(&cipher_request()).await.unwrap();

    match response {
        ApiResponse::Problem { status, details } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(details.status, Some(503));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_confirm_5g_aka_success_with_null_res_star() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/nausf-auth/v1/ue-authentications/ctx-1/5g-aka-confirmation")
            .json_body(json!({"resStar": null}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"authResult": "AUTHENTICATION_FAILURE"}));
    });

    let client = NausfClient::new(config_for(&server)).unwrap();
    let request = ConfirmationData {
        res_star: fivegc_sdk::Nullable::Null,
        supported_features: None,
    };
    let response = client.ue_authentication.confirm_5g_aka("ctx-1", &request).await.unwrap();

    api_mock.assert();
    let body = response.into_body().unwrap();
    assert_eq!(body.auth_result, AuthResult::Failure);
}

#[tokio::test]
async fn test_ue_sor_path_parameter_and_default_headers() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nausf-sorprotection/v1/imsi-208930000000001/ue-sor")
            .header("x-request-source", "udm")
            .header_exists("user-agent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "sorMacIausf": "0123456789abcdef0123456789abcdef",
                "counterSor": "0001"
            }));
    });

    let mut config = config_for(&server);
    config.add_default_header("x-request-source", "udm");
    let client = NausfClient::new(config).unwrap();
    let request = SorInfo {
        steering_container: None,
        ack_ind: false,
        sor_header: None,
        sor_transparent_info: None,
    };
    let response = client
        .sor_protection
        .ue_sor("imsi-208930000000001", &request)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_path_parameters_are_percent_encoded() {
    let client = SbiClient::new(auth::SERVICE_NAME, ClientConfiguration::default()).unwrap();
    let url = client
        .operation_url(&auth::CONFIRM_5G_AKA, &[("authCtxId", "ctx 1/2")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/nausf-auth/v1/ue-authentications/ctx%201%2F2/5g-aka-confirmation"
    );
}

#[test]
fn test_missing_path_parameter_is_an_error() {
    let client = SbiClient::new(auth::SERVICE_NAME, ClientConfiguration::default()).unwrap();
    let err = client.operation_url(&auth::EAP_SESSION, &[]).unwrap_err();
    assert!(matches!(err, SdkError::MissingConfigError { .. }));
}

#[tokio::test]
async fn test_server_variables_select_target() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/nlmf-loc/v1/cancel-location");
        then.status(204);
    });

    let mut config = ClientConfiguration::default();
    config.servers.push(
        ServerConfiguration::new("http://{target}/nlmf-loc/v1").with_variable(
            "target",
            ServerVariable {
                description: "LMF address".to_string(),
                default_value: "lmf.invalid".to_string(),
                enum_values: Vec::new(),
            },
        ),
    );
    config
        .server_variables
        .insert("target".to_string(), server.address().to_string());

    let client = LocationClient::new(config).unwrap();
    let request = CancelLocData {
        hgmlc_call_back_uri: "https://gmlc.example/callback".into(),
        ldr_reference: "ldr-2".into(),
        serving_lmf_identification: None,
        supported_features: None,
    };
    let response = client.cancel_location(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(response, ApiResponse::NoContent);
}
