use crate::{ApiError, AuthToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(header: Option<&str>) -> Result<AuthToken, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    AuthToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_extractor_with_bearer_header() {
    let token = extract(Some("Bearer abc123")).await.unwrap();

    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn test_extractor_with_raw_header() {
    let token = extract(Some("abc123")).await.unwrap();

    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let error = extract(None).await.err().unwrap();

    assert_eq!(error.error_code(), "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn test_extractor_rejects_empty_bearer() {
    let error = extract(Some("Bearer   ")).await.err().unwrap();

    assert_eq!(error.error_code(), "MISSING_CREDENTIAL");
}
