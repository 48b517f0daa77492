use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced by the login and linking flows.
///
/// Crate-specific errors (store, Moodle, Google) convert into this type at
/// their crate boundary so the session mediator only ever sees one taxonomy.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Google token or code could not be verified. The message is for logs
    /// only and is never sent to the client.
    #[error("Invalid OAuth token: {message} {location}")]
    InvalidOAuthToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Moodle username or password {location}")]
    InvalidLocalCredential { location: ErrorLocation },

    #[error("Moodle account already linked to {other_email} {location}")]
    AccountAlreadyLinked {
        other_email: String,
        location: ErrorLocation,
    },

    #[error("Identity not recognized by Moodle: {email} {location}")]
    IdentityNotRecognized {
        email: String,
        location: ErrorLocation,
    },

    /// Moodle answered with an exception payload.
    #[error("Remote error: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing session token {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Link storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    /// Transport failure or timeout talking to Moodle or Google.
    #[error("Upstream unavailable: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

impl BridgeError {
    #[track_caller]
    pub fn invalid_oauth_token<S: Into<String>>(message: S) -> Self {
        Self::InvalidOAuthToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_local_credential() -> Self {
        Self::InvalidLocalCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_already_linked<S: Into<String>>(other_email: S) -> Self {
        Self::AccountAlreadyLinked {
            other_email: other_email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_not_recognized<S: Into<String>>(email: S) -> Self {
        Self::IdentityNotRecognized {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::Remote {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_credential() -> Self {
        Self::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code sent to clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOAuthToken { .. } => "INVALID_OAUTH_TOKEN",
            Self::InvalidLocalCredential { .. } => "INVALID_CREDENTIALS",
            Self::AccountAlreadyLinked { .. } => "ACCOUNT_ALREADY_LINKED",
            Self::IdentityNotRecognized { .. } => "IDENTITY_NOT_RECOGNIZED",
            Self::Remote { .. } => "REMOTE_ERROR",
            Self::MissingCredential { .. } => "MISSING_CREDENTIAL",
            Self::Storage { .. } => "INTERNAL_ERROR",
            Self::Upstream { .. } => "UPSTREAM_UNAVAILABLE",
        }
    }

    /// Message that is safe to hand to the client.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidOAuthToken { .. } => {
                "Google sign-in could not be verified. Please sign in again.".to_string()
            }
            Self::InvalidLocalCredential { .. } => {
                "Invalid Moodle username or password".to_string()
            }
            Self::AccountAlreadyLinked { other_email, .. } => format!(
                "This Moodle account is already linked to {}. An account can only be linked to one Google email.",
                other_email
            ),
            Self::IdentityNotRecognized { .. } => {
                "This email is not registered in Moodle".to_string()
            }
            Self::Remote { message, .. } => message.clone(),
            Self::MissingCredential { .. } => "Missing session token".to_string(),
            Self::Storage { .. } => "Internal error".to_string(),
            Self::Upstream { .. } => "Upstream service unavailable".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, BridgeError>;
