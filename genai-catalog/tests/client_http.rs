mod support;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use genai_catalog::{Client, ErrorKind};

#[tokio::test]
async fn api_key_header_is_inserted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::build_gemini_client(&server.uri());
    let _ = client.models().list().await.unwrap();
}

#[tokio::test]
async fn api_key_header_respects_custom_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", "custom-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .header("x-goog-api-key", "custom-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let _ = client.models().list().await.unwrap();
}

#[tokio::test]
async fn custom_api_version_is_used_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [support::model_json("models/a", &["generateContent"])]
        })))
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .api_version("v1")
        .build()
        .unwrap();
    let response = client.models().list().await.unwrap();
    assert_eq!(response.models.unwrap().len(), 1);
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"models": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .timeout(1)
        .build()
        .unwrap();
    let err = client.models().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let client = support::build_gemini_client("http://127.0.0.1:1");
    let err = client.models().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
