use crate::{Session, VerifiedIdentity};

use std::fmt;

/// Terminal result of a Google login attempt.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(Session),
    /// No usable link exists. Not an error: the client should ask for Moodle
    /// credentials and call the link endpoint.
    RequiresLinking(LinkPrompt),
}

#[derive(Clone)]
pub struct LinkPrompt {
    pub identity: VerifiedIdentity,
    /// Set when the flow started from an authorization code, since the code
    /// itself cannot be replayed.
    pub id_token: Option<String>,
}

impl fmt::Debug for LinkPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkPrompt")
            .field("identity", &self.identity)
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
