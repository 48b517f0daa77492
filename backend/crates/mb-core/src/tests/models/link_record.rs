use crate::LinkRecord;

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_link_record_when_serialized_then_uses_stored_field_names() {
    let record = LinkRecord {
        local_username: "alice".to_string(),
        local_secret: "pw1".to_string(),
        linked_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
    };

    let json = serde_json::to_value(&record).unwrap();

    assert_that!(json["moodleUsername"].as_str(), some(eq("alice")));
    assert_that!(json["moodlePassword"].as_str(), some(eq("pw1")));
    assert_that!(json["linkedAt"].as_str(), some(starts_with("2025-03-01T12:30:00")));
}

#[test]
fn given_file_written_by_previous_server_when_parsed_then_records_load() {
    let raw = r#"{
        "a@x.com": {
            "moodleUsername": "alice",
            "moodlePassword": "pw1",
            "linkedAt": "2024-11-05T09:15:22.123Z"
        }
    }"#;

    let links: BTreeMap<String, LinkRecord> = serde_json::from_str(raw).unwrap();

    let record = links.get("a@x.com").unwrap();
    assert_eq!(record.local_username, "alice");
    assert_eq!(record.local_secret, "pw1");
    assert_that!(record.linked_at.to_rfc3339(), starts_with("2024-11-05T09:15:22.123"));
}

#[test]
fn given_link_record_when_debug_formatted_then_secret_is_hidden() {
    let record = LinkRecord::new("alice", "super-secret");

    let debug = format!("{:?}", record);

    assert_that!(debug, contains_substring("alice"));
    assert_that!(debug, not(contains_substring("super-secret")));
}
