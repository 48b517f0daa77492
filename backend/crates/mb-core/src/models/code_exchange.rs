use crate::VerifiedIdentity;

use std::fmt;

/// Result of trading an authorization code at Google's token endpoint.
///
/// The raw ID token is kept so a client that still has to link can replay it
/// against the link endpoint.
#[derive(Clone)]
pub struct CodeExchange {
    pub identity: VerifiedIdentity,
    pub id_token: String,
}

impl fmt::Debug for CodeExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeExchange")
            .field("identity", &self.identity)
            .field("id_token", &"<redacted>")
            .finish()
    }
}
