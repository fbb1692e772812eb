mod common;

use common::*;
use fivegc_sdk::core::{ApiResponse, ClientConfiguration};
use fivegc_sdk::models::location::{ExternalClientType, InputData};
use fivegc_sdk::services::nlmf::{NlmfClient, NlmfServer, Unimplemented};
use fivegc_sdk::{DispatchOptions, StatusCode};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_served_requests_reach_business_logic() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let mut server = NlmfServer::new("127.0.0.1:0", "/api", DispatchOptions::default());
    server.attach_broadcast(nf.clone()).attach_location(nf.clone());
    let addr = server.start().await.unwrap();

    let mut config = ClientConfiguration::for_host("http", addr.to_string());
    config.servers.push(fivegc_sdk::core::ServerConfiguration::new(
        "https://ignored.example/api/nlmf-loc/v1",
    ));
    let client = NlmfClient::new(config).unwrap();

    let response = client
        .location
        .determine_location(&InputData::new(ExternalClientType::EmergencyServices))
        .await
        .unwrap();
    assert_eq!(response.into_body(), Some(location_data()));

    nf.set_reply(Reply::TemporaryRedirect);
    let response = client
        .location
        .determine_location(&InputData::new(ExternalClientType::EmergencyServices))
        .await
        .unwrap();
    match response {
        ApiResponse::Redirect { status, redirect } => {
            assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
            assert_eq!(redirect.redirect_header.location.as_deref(), Some(ALT_LOCATION));
            assert_eq!(
                redirect.redirect_header.target_nf_id.as_deref(),
                Some(TARGET_NF_ID)
            );
        }
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(nf.call_count(), 2);

    server.stop();
    tokio::time::timeout(Duration::from_secs(5), server.wait())
        .await
        .expect("server did not stop in time")
        .unwrap();
}

#[tokio::test]
async fn test_unimplemented_nf_answers_not_implemented() {
    let mut server = NlmfServer::new("127.0.0.1:0", "", DispatchOptions::default());
    let placeholder = Arc::new(Unimplemented);
    server
        .attach_broadcast(placeholder.clone())
        .attach_location(placeholder);
    let addr = server.start().await.unwrap();

    let client = NlmfClient::new(ClientConfiguration::for_host("http", addr.to_string())).unwrap();
    let response = client.broadcast.ciphering_key_data(&cipher_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let stop = server.stop_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        stop.stop();
    });
    tokio::time::timeout(Duration::from_secs(5), server.wait())
        .await
        .expect("server did not stop in time")
        .unwrap();
}

#[tokio::test]
async fn test_connection_refused_after_stop() {
    let nf = Arc::new(FakeNf::new(Reply::Ok));
    let mut server = NlmfServer::new("127.0.0.1:0", "", DispatchOptions::default());
    server.attach_broadcast(nf);
    let addr = server.start().await.unwrap();
    server.stop();
    server.wait().await.unwrap();

    let client = NlmfClient::new(ClientConfiguration::for_host("http", addr.to_string())).unwrap();
    let err = client
        .broadcast
        .ciphering_key_data(&cipher_request())
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
