mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn create_account_with_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account"))
        .and(body_json(json!({
            "email": "test@example.com",
            "terms_of_service": "1",
            "password": "s3cret",
            "password_confirmation": "s3cret"
        })))
        .respond_with(reply(200, r#"{"api_key": "abcd1234"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_account("test@example.com", "s3cret")
        .await
        .unwrap();

    assert_eq!(created.api_key.as_deref(), Some("abcd1234"));
    assert_eq!(created.password, None);
}

#[tokio::test]
async fn create_account_generated_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account"))
        .and(body_json(json!({
            "email": "test@example.com",
            "terms_of_service": "1"
        })))
        .respond_with(reply(200, r#"{"api_key": "abcd1234", "password": "foo"}"#))
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_account("test@example.com", "")
        .await
        .unwrap();

    assert_eq!(created.password.as_deref(), Some("foo"));
}

#[tokio::test]
async fn create_account_rejected() {
    let server = serve("POST", "/account", reply(422, r#"{"errors":["Email taken"]}"#)).await;

    let err = client_for(&server)
        .create_account("test@example.com", "")
        .await
        .unwrap_err();

    assert_status(&err, 422);
    match err {
        zencoder::ZencoderError::UnexpectedStatus { body, .. } => {
            assert_eq!(body.as_deref(), Some(r#"{"errors":["Email taken"]}"#));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn create_account_unreachable() {
    let err = unreachable_client()
        .create_account("test@example.com", "")
        .await
        .unwrap_err();
    assert_transport(&err);
}

#[tokio::test]
async fn get_account() {
    let server = serve(
        "GET",
        "/account",
        reply(
            200,
            r#"{
              "account_state": "active",
              "plan": "Growth",
              "minutes_used": 12549,
              "minutes_included": 25000,
              "billing_state": "active",
              "integration_mode": false
            }"#,
        ),
    )
    .await;

    let account = client_for(&server).get_account().await.unwrap();

    assert_eq!(account.account_state.as_deref(), Some("active"));
    assert_eq!(account.plan.as_deref(), Some("Growth"));
    assert_eq!(account.minutes_used, Some(12549));
    assert_eq!(account.minutes_included, Some(25000));
    assert_eq!(account.billing_state.as_deref(), Some("active"));
    assert_eq!(account.integration_mode, Some(false));
}

#[tokio::test]
async fn get_account_unauthorized() {
    let server = serve("GET", "/account", ResponseTemplate::new(401)).await;
    let err = client_for(&server).get_account().await.unwrap_err();
    assert_status(&err, 401);
}

#[tokio::test]
async fn get_account_malformed_body() {
    let server = serve("GET", "/account", reply(200, "<html>")).await;
    let err = client_for(&server).get_account().await.unwrap_err();
    assert_decode(&err);
}

#[tokio::test]
async fn get_account_unreachable() {
    let err = unreachable_client().get_account().await.unwrap_err();
    assert_transport(&err);
}

#[tokio::test]
async fn wrong_api_key_is_not_served() {
    let server = serve("GET", "/account", reply(200, "{}")).await;
    let client = zencoder::ClientBuilder::new()
        .api_key("other")
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client.get_account().await.unwrap_err();
    assert_status(&err, 404);
}

#[tokio::test]
async fn set_integration_mode() {
    let server = serve("PUT", "/account/integration", ResponseTemplate::new(204)).await;
    client_for(&server).set_integration_mode().await.unwrap();
}

#[tokio::test]
async fn set_integration_mode_failure() {
    let server = serve("PUT", "/account/integration", ResponseTemplate::new(500)).await;
    let err = client_for(&server).set_integration_mode().await.unwrap_err();
    assert_status(&err, 500);
}

#[tokio::test]
async fn set_live_mode() {
    let server = serve("PUT", "/account/live", ResponseTemplate::new(204)).await;
    client_for(&server).set_live_mode().await.unwrap();
}

#[tokio::test]
async fn set_live_mode_failure() {
    let server = serve("PUT", "/account/live", ResponseTemplate::new(402)).await;
    let err = client_for(&server).set_live_mode().await.unwrap_err();
    assert_status(&err, 402);
}

#[tokio::test]
async fn set_live_mode_unreachable() {
    let err = unreachable_client().set_live_mode().await.unwrap_err();
    assert_transport(&err);
}
