use mb_core::BridgeError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to Moodle
#[derive(Error, Debug)]
pub enum MoodleError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Moodle answered HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Unreadable Moodle response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// Exception payload from a web-service function
    #[error("Moodle error: {message} (code: {}) {location}", .errorcode.as_deref().unwrap_or("none"))]
    Remote {
        message: String,
        errorcode: Option<String>,
        location: ErrorLocation,
    },

    #[error("Missing session token {location}")]
    MissingToken { location: ErrorLocation },

    /// `/login/token.php` refused the username/password
    #[error("Moodle rejected the credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl MoodleError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("timed out: {}", err)
        } else {
            err.to_string()
        };
        MoodleError::Http {
            message,
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        MoodleError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        MoodleError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote<S: Into<String>>(message: S, errorcode: Option<String>) -> Self {
        MoodleError::Remote {
            message: message.into(),
            errorcode,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token() -> Self {
        MoodleError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        MoodleError::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        MoodleError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Caused by what the caller sent rather than by Moodle
    pub fn is_bad_request(&self) -> bool {
        matches!(self, MoodleError::InvalidUrl { .. })
    }
}

impl From<reqwest::Error> for MoodleError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MoodleError::from_reqwest(err)
    }
}

impl From<MoodleError> for BridgeError {
    #[track_caller]
    fn from(err: MoodleError) -> Self {
        match err {
            MoodleError::Remote { message, .. } => BridgeError::remote(message),
            MoodleError::MissingToken { .. } => BridgeError::missing_credential(),
            MoodleError::InvalidCredentials { .. } => BridgeError::invalid_local_credential(),
            MoodleError::InvalidUrl { message, .. } => BridgeError::remote(message),
            other @ (MoodleError::Http { .. }
            | MoodleError::Status { .. }
            | MoodleError::Decode { .. }) => BridgeError::upstream(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MoodleError>;
