use crate::{SessionToken, UserProfile, VerifiedIdentity};

/// An authenticated Moodle session handed back to the client
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub profile: UserProfile,
    /// Present when the session was reached through a Google flow
    pub google_identity: Option<VerifiedIdentity>,
}

impl Session {
    pub fn linked_to_google(&self) -> bool {
        self.google_identity.is_some()
    }
}
