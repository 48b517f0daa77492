#![allow(dead_code)]

//! Test infrastructure for mb-server API tests

use mb_core::{BridgeError, CodeExchange, IdentityVerifier, Result, VerifiedIdentity};
use mb_links::MemoryLinkStore;
use mb_moodle::{MoodleClient, MoodleClientConfig, MoodleDirectoryGate, MoodleTokenIssuer};
use mb_server::{AppState, build_router};
use mb_session::SessionMediator;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

pub const CLIENT_APP_URL: &str = "http://localhost:8081/";

/// Google stand-in: `token-for:<email>` and `code-for:<email>` are valid
pub struct FakeVerifier;

fn identity(email: &str) -> VerifiedIdentity {
    VerifiedIdentity {
        email: email.to_string(),
        display_name: Some("Alice Google".to_string()),
        picture_url: Some("https://lh3.example/alice.png".to_string()),
    }
}

#[async_trait]
impl IdentityVerifier for FakeVerifier {
    fn authorization_url(&self) -> Result<String> {
        Ok("https://accounts.example/o/oauth2/v2/auth?client_id=test".to_string())
    }

    async fn verify_token(&self, id_token: &str) -> Result<VerifiedIdentity> {
        id_token
            .strip_prefix("token-for:")
            .map(identity)
            .ok_or_else(|| BridgeError::invalid_oauth_token("signature mismatch"))
    }

    async fn exchange_code(&self, code: &str) -> Result<CodeExchange> {
        let email = code
            .strip_prefix("code-for:")
            .ok_or_else(|| BridgeError::invalid_oauth_token("invalid_grant"))?;
        Ok(CodeExchange {
            identity: identity(email),
            id_token: format!("token-for:{}", email),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub moodle: MockServer,
    pub links: Arc<MemoryLinkStore>,
}

/// Router wired to a wiremock Moodle and an in-memory link store
pub async fn test_app(admin_token: Option<&str>) -> TestApp {
    let moodle = MockServer::start().await;

    let client = Arc::new(
        MoodleClient::new(MoodleClientConfig {
            base_url: moodle.uri(),
            service: "app_movil".to_string(),
            rpc_timeout: Duration::from_secs(5),
            file_timeout: Duration::from_secs(5),
        })
        .expect("moodle client"),
    );

    let links = Arc::new(MemoryLinkStore::new());
    let mediator = Arc::new(SessionMediator::new(
        Arc::new(FakeVerifier),
        Arc::new(MoodleTokenIssuer::new(client.clone())),
        Arc::new(MoodleDirectoryGate::new(
            client.clone(),
            admin_token.map(str::to_string),
        )),
        links.clone(),
    ));

    let state = AppState::new(
        mediator,
        client,
        Url::parse(CLIENT_APP_URL).expect("client app url"),
    );

    TestApp {
        router: build_router(state),
        moodle,
        links,
    }
}

/// Accept one username/password pair; every other pair is rejected
pub async fn mount_moodle_account(server: &MockServer, username: &str, password: &str, token: &str) {
    Mock::given(method("POST"))
        .and(path("/login/token.php"))
        .and(body_string_contains(format!("username={}", username)))
        .and(body_string_contains(format!("password={}", password)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login/token.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Invalid login, please try again",
            "errorcode": "invalidlogin"
        })))
        .with_priority(10)
        .mount(server)
        .await;
}

pub async fn mount_site_info(server: &MockServer, token: &str, userid: i64) {
    Mock::given(method("POST"))
        .and(path("/webservice/rest/server.php"))
        .and(body_string_contains("wsfunction=core_webservice_get_site_info"))
        .and(body_string_contains(format!("wstoken={}", token)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userid": userid,
            "fullname": "Alice Example",
            "useremail": "",
            "userpictureurl": ""
        })))
        .mount(server)
        .await;
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Send a request and decode the JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
