pub mod assignments;
pub mod courses;
pub mod file_query;
pub mod files;
pub mod forum_reply_request;
pub mod forums;
pub mod save_text_request;

use crate::{ApiError, ApiResult};

use serde_json::{Value, json};

/// Parse a numeric Moodle id taken from the URL path
#[track_caller]
pub(crate) fn parse_id(raw: &str, name: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("{} must be a number, got '{}'", name, raw)))
}

/// `{ "ok": true, "<key>": data }`
pub(crate) fn ok_body(key: &str, data: Value) -> Value {
    let mut body = json!({ "ok": true });
    body[key] = data;
    body
}
