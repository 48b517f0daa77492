use mb_core::BridgeError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token header has no 'kid' {location}")]
    MissingKeyId { location: ErrorLocation },

    #[error("No Google signing key with kid '{kid}' {location}")]
    UnknownKey { kid: String, location: ErrorLocation },

    /// Google's token endpoint refused the authorization code
    #[error("Code exchange rejected: {message} {location}")]
    CodeRejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected Google response: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    #[error("Google OAuth not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_claim<C: Into<String>, M: Into<String>>(claim: C, message: M) -> Self {
        Self::InvalidClaim {
            claim: claim.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_key_id() -> Self {
        Self::MissingKeyId {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_key<S: Into<String>>(kid: S) -> Self {
        Self::UnknownKey {
            kid: kid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn code_rejected<S: Into<String>>(message: S) -> Self {
        Self::CodeRejected {
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

    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        Self::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Map a jsonwebtoken failure onto the variants callers match on
    #[track_caller]
    pub fn from_jwt(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        let location = ErrorLocation::from(Location::caller());
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired { location },
            ErrorKind::InvalidAudience => Self::InvalidClaim {
                claim: "aud".to_string(),
                message: "audience does not match the configured client id".to_string(),
                location,
            },
            ErrorKind::InvalidIssuer => Self::InvalidClaim {
                claim: "iss".to_string(),
                message: "issuer is not Google".to_string(),
                location,
            },
            _ => Self::JwtDecode {
                source: err,
                location,
            },
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

impl From<AuthError> for BridgeError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Http { .. } | AuthError::Upstream { .. } | AuthError::NotConfigured { .. } => {
                BridgeError::upstream(err.to_string())
            }
            other => BridgeError::invalid_oauth_token(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
