use crate::ApiError;

use mb_core::BridgeError;
use mb_moodle::MoodleError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_bad_request_returns_400_with_ok_false() {
    let (status, json) = body_json(ApiError::bad_request("Missing required field: username")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "Missing required field: username");
}

#[tokio::test]
async fn test_bridge_errors_map_to_status_and_code() {
    let cases = [
        (BridgeError::invalid_oauth_token("bad sig"), 401_u16, "INVALID_OAUTH_TOKEN"),
        (BridgeError::invalid_local_credential(), 401, "INVALID_CREDENTIALS"),
        (BridgeError::missing_credential(), 401, "MISSING_CREDENTIAL"),
        (BridgeError::account_already_linked("a@x.com"), 403, "ACCOUNT_ALREADY_LINKED"),
        (BridgeError::identity_not_recognized("a@x.com"), 403, "IDENTITY_NOT_RECOGNIZED"),
        (BridgeError::remote("Access denied"), 500, "REMOTE_ERROR"),
        (BridgeError::storage("disk full"), 500, "INTERNAL_ERROR"),
        (BridgeError::upstream("timeout"), 502, "UPSTREAM_UNAVAILABLE"),
    ];

    for (error, expected_status, expected_code) in cases {
        let (status, json) = body_json(error.into()).await;
        assert_eq!(status.as_u16(), expected_status, "{}", expected_code);
        assert_eq!(json["error"]["code"], expected_code);
    }
}

#[tokio::test]
async fn test_account_already_linked_message_names_other_email() {
    let (_, json) = body_json(BridgeError::account_already_linked("a@x.com").into()).await;

    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("a@x.com"));
}

#[tokio::test]
async fn test_storage_details_not_exposed() {
    let (_, json) = body_json(BridgeError::storage("/srv/links.json: permission denied").into()).await;

    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("links.json"));
}

#[tokio::test]
async fn test_oauth_failure_details_not_exposed() {
    let (_, json) = body_json(BridgeError::invalid_oauth_token("InvalidSignature").into()).await;

    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("InvalidSignature"));
}

#[tokio::test]
async fn test_remote_message_passed_through() {
    let (_, json) = body_json(BridgeError::remote("Sorry, but you do not currently have permissions").into()).await;

    assert_eq!(
        json["error"]["message"],
        "Sorry, but you do not currently have permissions"
    );
}

#[tokio::test]
async fn test_moodle_invalid_url_is_bad_request() {
    let error: ApiError = MoodleError::invalid_url("file URL must be on the Moodle site").into();
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "file URL must be on the Moodle site");
}

#[tokio::test]
async fn test_moodle_missing_token_is_missing_credential() {
    let error: ApiError = MoodleError::missing_token().into();
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn test_moodle_status_is_upstream() {
    let error: ApiError = MoodleError::status(503).into();
    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
