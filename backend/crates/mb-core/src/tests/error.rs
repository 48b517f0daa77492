use crate::BridgeError;

use googletest::prelude::*;

#[test]
fn given_account_already_linked_when_formatting_client_message_then_names_other_email() {
    let err = BridgeError::account_already_linked("a@x.com");

    assert_that!(err.error_code(), eq("ACCOUNT_ALREADY_LINKED"));
    assert_that!(err.client_message(), contains_substring("a@x.com"));
}

#[test]
fn given_invalid_oauth_token_when_formatting_client_message_then_provider_detail_is_hidden() {
    let err = BridgeError::invalid_oauth_token("InvalidAudience: expected 123.apps");

    assert_that!(err.error_code(), eq("INVALID_OAUTH_TOKEN"));
    assert_that!(err.client_message(), not(contains_substring("InvalidAudience")));
    assert_that!(err.to_string(), contains_substring("InvalidAudience"));
}

#[test]
fn given_remote_error_when_formatting_client_message_then_message_passes_through() {
    let err = BridgeError::remote("Access control exception");

    assert_that!(err.error_code(), eq("REMOTE_ERROR"));
    assert_eq!(err.client_message(), "Access control exception");
}

#[test]
fn given_storage_error_when_formatting_client_message_then_detail_is_hidden() {
    let err = BridgeError::storage("failed to parse /srv/links.json");

    assert_that!(err.client_message(), not(contains_substring("links.json")));
}
