use crate::{Result, SessionToken, UserProfile};

use async_trait::async_trait;

/// Trades Moodle username/password for a session token and profile.
#[async_trait]
pub trait SessionTokenIssuer: Send + Sync {
    /// Fails with `BridgeError::InvalidLocalCredential` when Moodle rejects the
    /// credentials. Other failures keep their own variant.
    async fn exchange(&self, username: &str, secret: &str) -> Result<(SessionToken, UserProfile)>;
}
