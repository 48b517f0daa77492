//! Integration tests for login and account-linking endpoints
mod common;

use crate::common::{json_request, mount_moodle_account, mount_site_info, send, test_app};

use mb_core::{LinkRecord, LinkStore};

use axum::http::StatusCode;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

#[tokio::test]
async fn test_password_login_success() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "pw1", "tok-alice").await;
    mount_site_info(&app.moodle, "tok-alice", 42).await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/login", json!({ "username": "alice", "password": "pw1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["token"], "tok-alice");
    assert_eq!(json["user"]["id"], 42);
    assert_eq!(json["user"]["fullname"], "Alice Example");
    assert_eq!(json["user"]["email"], "alice");
}

#[tokio::test]
async fn test_password_login_wrong_password_returns_401() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "pw1", "tok-alice").await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/login", json!({ "username": "alice", "password": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_password_login_missing_field_returns_400() {
    let app = test_app(None).await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/login", json!({ "username": "alice" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_password_login_malformed_json_returns_400() {
    let app = test_app(None).await;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, json) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
}

#[tokio::test]
async fn test_google_login_without_link_requires_linking() {
    let app = test_app(None).await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/google", json!({ "idToken": "token-for:a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["requiresLinking"], true);
    assert_eq!(json["googleUser"]["email"], "a@x.com");
    assert_eq!(json["googleUser"]["name"], "Alice Google");
    assert!(json.get("token").is_none());
}

#[tokio::test]
async fn test_google_login_missing_token_returns_400() {
    let app = test_app(None).await;

    let (status, _) = send(&app.router, json_request("POST", "/auth/google", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_google_login_invalid_token_returns_401() {
    let app = test_app(None).await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/google", json!({ "idToken": "forged" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_OAUTH_TOKEN");
}

#[tokio::test]
async fn test_link_then_google_login_returns_same_user() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "pw1", "tok-alice").await;
    mount_site_info(&app.moodle, "tok-alice", 42).await;

    let (status, linked) = send(
        &app.router,
        json_request(
            "POST",
            "/auth/link-google-moodle",
            json!({ "idToken": "token-for:a@x.com", "username": "alice", "password": "pw1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(linked["user"]["linkedToGoogle"], true);
    assert_eq!(linked["user"]["googleEmail"], "a@x.com");
    assert_eq!(linked["user"]["email"], "a@x.com");
    assert_eq!(linked["user"]["avatar"], "https://lh3.example/alice.png");

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/google", json!({ "idToken": "token-for:a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["token"], "tok-alice");
    assert_eq!(json["user"]["id"], linked["user"]["id"]);
    assert!(app.links.get("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_link_conflicting_email_returns_403() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "pw2", "tok-alice").await;
    mount_site_info(&app.moodle, "tok-alice", 42).await;
    app.links
        .set("a@x.com", LinkRecord::new("alice", "pw1"))
        .await
        .unwrap();

    let (status, json) = send(
        &app.router,
        json_request(
            "POST",
            "/auth/link-google-moodle",
            json!({ "idToken": "token-for:b@y.com", "username": "alice", "password": "pw2" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "ACCOUNT_ALREADY_LINKED");
    assert!(json["error"]["message"].as_str().unwrap().contains("a@x.com"));
    assert!(app.links.get("b@y.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_link_wrong_moodle_password_returns_401() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "pw1", "tok-alice").await;

    let (status, json) = send(
        &app.router,
        json_request(
            "POST",
            "/auth/link-google-moodle",
            json!({ "idToken": "token-for:a@x.com", "username": "alice", "password": "bad" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert!(app.links.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stale_link_is_removed_on_google_login() {
    let app = test_app(None).await;
    mount_moodle_account(&app.moodle, "alice", "rotated", "tok-alice").await;
    app.links
        .set("a@x.com", LinkRecord::new("alice", "old-password"))
        .await
        .unwrap();

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/google", json!({ "idToken": "token-for:a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["requiresLinking"], true);
    assert!(!app.links.get_all().await.unwrap().contains_key("a@x.com"));
}

#[tokio::test]
async fn test_gate_rejection_returns_403() {
    let app = test_app(Some("admin-tok")).await;
    Mock::given(method("POST"))
        .and(path("/webservice/rest/server.php"))
        .and(body_string_contains("wsfunction=core_user_get_users_by_field"))
        .and(body_string_contains("wstoken=admin-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.moodle)
        .await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/google", json!({ "idToken": "token-for:stranger@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "IDENTITY_NOT_RECOGNIZED");
}

#[tokio::test]
async fn test_moodle_down_returns_502() {
    let app = test_app(None).await;
    Mock::given(method("POST"))
        .and(path("/login/token.php"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&app.moodle)
        .await;

    let (status, json) = send(
        &app.router,
        json_request("POST", "/auth/login", json!({ "username": "alice", "password": "pw1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_UNAVAILABLE");
}
