use crate::{SessionResponse, UserDto};

use mb_core::{Session, SessionToken, UserProfile, VerifiedIdentity};

fn profile() -> UserProfile {
    UserProfile {
        id: 42,
        full_name: "Alice Example".to_string(),
        email: Some("alice@campus.edu".to_string()),
        avatar_url: None,
    }
}

#[test]
fn test_password_session_omits_google_fields() {
    let session = Session {
        token: SessionToken::new("tok"),
        profile: profile(),
        google_identity: None,
    };

    let json = serde_json::to_value(UserDto::from(&session)).unwrap();

    assert_eq!(json["id"], 42);
    assert_eq!(json["fullname"], "Alice Example");
    assert_eq!(json["email"], "alice@campus.edu");
    assert!(json["avatar"].is_null());
    assert!(json.get("googleEmail").is_none());
    assert!(json.get("linkedToGoogle").is_none());
}

#[test]
fn test_google_session_carries_google_email() {
    let session = Session {
        token: SessionToken::new("tok"),
        profile: profile(),
        google_identity: Some(VerifiedIdentity {
            email: "a@x.com".to_string(),
            display_name: None,
            picture_url: None,
        }),
    };

    let json = serde_json::to_value(SessionResponse::from(session)).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["token"], "tok");
    assert_eq!(json["user"]["googleEmail"], "a@x.com");
    assert_eq!(json["user"]["linkedToGoogle"], true);
}
