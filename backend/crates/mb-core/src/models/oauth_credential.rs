use std::fmt;

/// What the client presented to prove its Google identity
#[derive(Clone, PartialEq, Eq)]
pub enum OAuthCredential {
    /// ID token obtained client-side (Google Sign-In SDK)
    IdToken(String),
    /// Authorization code from the redirect flow
    AuthorizationCode(String),
}

impl fmt::Debug for OAuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdToken(_) => f.write_str("IdToken(<redacted>)"),
            Self::AuthorizationCode(_) => f.write_str("AuthorizationCode(<redacted>)"),
        }
    }
}
