use crate::{CodeExchange, LinkPrompt, OAuthCredential, SessionToken, VerifiedIdentity};

use googletest::prelude::*;

fn identity() -> VerifiedIdentity {
    VerifiedIdentity {
        email: "a@x.com".to_string(),
        display_name: Some("Alice".to_string()),
        picture_url: None,
    }
}

#[test]
fn given_session_token_when_debug_formatted_then_value_is_hidden() {
    let token = SessionToken::new("abc123token");

    assert_that!(format!("{:?}", token), not(contains_substring("abc123token")));
    assert_that!(token.as_str(), eq("abc123token"));
}

#[test]
fn given_oauth_credential_when_debug_formatted_then_value_is_hidden() {
    let credential = OAuthCredential::IdToken("eyJhbGciOi".to_string());

    assert_that!(format!("{:?}", credential), not(contains_substring("eyJhbGciOi")));
}

#[test]
fn given_code_exchange_and_prompt_when_debug_formatted_then_id_token_is_hidden() {
    let exchange = CodeExchange {
        identity: identity(),
        id_token: "raw-id-token".to_string(),
    };
    let prompt = LinkPrompt {
        identity: identity(),
        id_token: Some("raw-id-token".to_string()),
    };

    assert_that!(format!("{:?}", exchange), not(contains_substring("raw-id-token")));
    assert_that!(format!("{:?}", prompt), not(contains_substring("raw-id-token")));
    assert_that!(format!("{:?}", prompt), contains_substring("a@x.com"));
}
