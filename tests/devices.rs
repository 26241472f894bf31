//
//  webmate-sdk
//  tests/devices.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::sync::Arc;

use mockito::{Server, ServerGuard};
use serde_json::json;

use webmate_sdk::api::common::{DeviceId, ProjectId};
use webmate_sdk::api::ApiError;
use webmate_sdk::{DeviceClient, WebmateApiSession, WebmateAuthInfo, WebmateEnvironment};

fn client(server: &ServerGuard) -> DeviceClient {
    let session = WebmateApiSession::new(
        WebmateAuthInfo::new("jane@example.com", "secret-token"),
        WebmateEnvironment::new(&server.url()).unwrap(),
    );
    DeviceClient::new(Arc::new(session)).unwrap()
}

#[tokio::test]
async fn test_get_device_ids_for_project() {
    let mut server = Server::new_async().await;
    let project = ProjectId::random();
    let devices = vec![DeviceId::random(), DeviceId::random()];

    let mock = server
        .mock("GET", format!("/project/{project}/device/devices").as_str())
        .match_header("webmate.user", "jane@example.com")
        .match_header("webmate.api-token", "secret-token")
        .with_status(200)
        .with_body(json!(devices).to_string())
        .create_async()
        .await;

    let ids = client(&server)
        .get_device_ids_for_project(project)
        .await
        .unwrap();

    assert_eq!(ids, devices);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_device_list_requires_response() {
    let mut server = Server::new_async().await;
    let project = ProjectId::random();

    server
        .mock("GET", format!("/project/{project}/device/devices").as_str())
        .with_status(404)
        .create_async()
        .await;

    let err = client(&server)
        .get_device_ids_for_project(project)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NoResponse(_)));
    assert_eq!(err.to_string(), "Could not get device list. Got no response");
}

#[tokio::test]
async fn test_synchronize_device() {
    let mut server = Server::new_async().await;
    let device = DeviceId::random();

    let mock = server
        .mock("POST", format!("/device/devices/{device}/sync").as_str())
        .with_status(204)
        .create_async()
        .await;

    client(&server).synchronize_device(device).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_release_device() {
    let mut server = Server::new_async().await;
    let device = DeviceId::random();

    let mock = server
        .mock("DELETE", format!("/device/devices/{device}").as_str())
        .with_status(200)
        .create_async()
        .await;

    client(&server).release_device(device).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_release_forbidden_is_status_error() {
    let mut server = Server::new_async().await;
    let device = DeviceId::random();

    server
        .mock("DELETE", format!("/device/devices/{device}").as_str())
        .with_status(403)
        .with_body(r#"{"error":{"message":"Device belongs to another project"}}"#)
        .create_async()
        .await;

    let err = client(&server).release_device(device).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "API error (403 Forbidden): Device belongs to another project"
    );
}
