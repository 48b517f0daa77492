use crate::{MoodleError, MoodleResult};

use serde_json::Value;

/// A web-service response, classified once at the gateway.
///
/// Moodle reports failures with HTTP 200 and an object carrying
/// `exception` and/or `errorcode`.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    Success(Value),
    Failure {
        message: String,
        errorcode: Option<String>,
    },
}

impl RpcOutcome {
    pub fn from_value(value: Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Success(value);
        };

        if !object.contains_key("exception") && !object.contains_key("errorcode") {
            return Self::Success(value);
        }

        let errorcode = object
            .get("errorcode")
            .and_then(Value::as_str)
            .map(String::from);
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| errorcode.clone())
            .or_else(|| {
                object
                    .get("exception")
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown Moodle error".to_string());

        Self::Failure { message, errorcode }
    }

    #[track_caller]
    pub fn into_result(self) -> MoodleResult<Value> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { message, errorcode } => Err(MoodleError::remote(message, errorcode)),
        }
    }
}
