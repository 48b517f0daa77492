use crate::{CodeExchange, Result, VerifiedIdentity};

use async_trait::async_trait;

/// Google OAuth/OpenID verification.
///
/// Implementations must check the audience against the configured client id.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Consent screen URL the browser is redirected to
    fn authorization_url(&self) -> Result<String>;

    async fn verify_token(&self, id_token: &str) -> Result<VerifiedIdentity>;

    async fn exchange_code(&self, code: &str) -> Result<CodeExchange>;
}
