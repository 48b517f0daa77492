use crate::tests::fakes::default_harness;

use mb_core::BridgeError;

use googletest::prelude::*;

#[tokio::test]
async fn given_valid_credentials_when_logging_in_then_session_without_google() {
    // Given
    let h = default_harness();

    // When
    let session = h.mediator.login_with_password("alice", "pw1").await.unwrap();

    // Then
    assert_that!(session.token.as_str(), eq("moodle-token-alice"));
    assert_that!(session.profile.id, eq(42));
    assert_that!(session.profile.email.as_deref(), some(eq("alice")));
    assert!(!session.linked_to_google());
    assert_that!(h.store.accesses(), eq(0));
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_invalid_local_credential() {
    // Given
    let h = default_harness();

    // When
    let result = h.mediator.login_with_password("alice", "nope").await;

    // Then
    assert!(matches!(result, Err(BridgeError::InvalidLocalCredential { .. })));
}
