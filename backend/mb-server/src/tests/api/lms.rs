use crate::api::lms::{ok_body, parse_id};

use serde_json::json;

#[test]
fn test_parse_id_accepts_number() {
    assert_eq!(parse_id("17", "course id").unwrap(), 17);
}

#[test]
fn test_parse_id_rejects_text() {
    let error = parse_id("abc", "course id").err().unwrap();

    assert_eq!(error.error_code(), "BAD_REQUEST");
    assert!(error.client_message().contains("course id"));
}

#[test]
fn test_ok_body_wraps_data_under_key() {
    let body = ok_body("courses", json!([{ "id": 3 }]));

    assert_eq!(body, json!({ "ok": true, "courses": [{ "id": 3 }] }));
}
