use crate::{GoogleVerifier, GoogleVerifierConfig};

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

fn verifier() -> GoogleVerifier {
    GoogleVerifier::new(GoogleVerifierConfig {
        client_id: "123.apps.googleusercontent.com".to_string(),
        client_secret: None,
        redirect_uri: "http://localhost:3000/auth/google/callback".to_string(),
        auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
        token_url: "https://oauth2.googleapis.com/token".to_string(),
        jwks_url: "https://www.googleapis.com/oauth2/v3/certs".to_string(),
        jwks_cache_ttl: Duration::from_secs(3600),
        jwks_min_refetch: crate::JWKS_MIN_REFETCH,
        http_timeout: Duration::from_secs(15),
    })
    .unwrap()
}

#[test]
fn given_verifier_when_building_consent_url_then_carries_scopes_and_prompt() {
    let url = Url::parse(&verifier().consent_url().unwrap()).unwrap();
    let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("accounts.google.com"));
    assert_eq!(query["client_id"], "123.apps.googleusercontent.com");
    assert_eq!(query["redirect_uri"], "http://localhost:3000/auth/google/callback");
    assert_eq!(query["response_type"], "code");
    assert_eq!(query["scope"], "openid email profile");
    assert_eq!(query["access_type"], "offline");
    assert_eq!(query["prompt"], "select_account");
}

#[tokio::test]
async fn given_no_client_secret_when_redeeming_code_then_not_configured() {
    let result = verifier().redeem_code("4/abc").await;

    assert!(matches!(result, Err(crate::AuthError::NotConfigured { .. })));
}
