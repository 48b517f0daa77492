//! REST API error types
//!
//! Every failure leaves the server as `{ "ok": false, "error": { code, message } }`
//! with the status taken from the error taxonomy.

use mb_core::BridgeError;
use mb_moodle::MoodleError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_CREDENTIALS", "BAD_REQUEST")
    pub code: String,
    /// Human-readable error message, safe to show to users
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Login, linking or Moodle failure; status follows the variant
    #[error("{source}")]
    Bridge {
        #[from]
        source: BridgeError,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Bridge { source } => match source {
                BridgeError::InvalidOAuthToken { .. }
                | BridgeError::InvalidLocalCredential { .. }
                | BridgeError::MissingCredential { .. } => StatusCode::UNAUTHORIZED,
                BridgeError::AccountAlreadyLinked { .. }
                | BridgeError::IdentityNotRecognized { .. } => StatusCode::FORBIDDEN,
                BridgeError::Remote { .. } | BridgeError::Storage { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                BridgeError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            },
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Bridge { source } => source.error_code(),
        }
    }

    pub fn client_message(&self) -> String {
        match self {
            ApiError::BadRequest { message, .. } => message.clone(),
            ApiError::Bridge { source } => source.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = ApiErrorResponse {
            ok: false,
            error: ApiErrorBody {
                code: self.error_code().to_string(),
                message: self.client_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Bad file URLs are the caller's fault, the rest goes through the bridge
/// taxonomy
impl From<MoodleError> for ApiError {
    #[track_caller]
    fn from(e: MoodleError) -> Self {
        match e {
            MoodleError::InvalidUrl { message, .. } => ApiError::bad_request(message),
            other => ApiError::Bridge {
                source: BridgeError::from(other),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid JSON body: {}", e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query string: {}", e.body_text()))
    }
}

/// Reject blank required fields
#[track_caller]
pub fn require_field<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("Missing required field: {}", name)));
    }
    Ok(value)
}

pub type Result<T> = std::result::Result<T, ApiError>;
