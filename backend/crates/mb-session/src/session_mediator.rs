use mb_core::{
    BridgeError, IdentityGate, IdentityVerifier, LinkPrompt, LinkRecord, LinkStore, LoginOutcome,
    OAuthCredential, Result, Session, SessionToken, SessionTokenIssuer, UserProfile,
    VerifiedIdentity,
};

use std::sync::Arc;

use log::{info, warn};

/// Orchestrates password login, Google login and account linking.
///
/// Google login walks: verify, gate, look up link, exchange the stored
/// credentials. A stored password Moodle no longer accepts deletes the link
/// and the caller is asked to link again. Any other failure leaves the link
/// alone.
pub struct SessionMediator {
    verifier: Arc<dyn IdentityVerifier>,
    issuer: Arc<dyn SessionTokenIssuer>,
    gate: Arc<dyn IdentityGate>,
    links: Arc<dyn LinkStore>,
}

impl SessionMediator {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        issuer: Arc<dyn SessionTokenIssuer>,
        gate: Arc<dyn IdentityGate>,
        links: Arc<dyn LinkStore>,
    ) -> Self {
        Self {
            verifier,
            issuer,
            gate,
            links,
        }
    }

    /// Consent screen URL for the redirect flow
    pub fn authorization_url(&self) -> Result<String> {
        self.verifier.authorization_url()
    }

    /// Plain Moodle login. Links are not consulted.
    pub async fn login_with_password(&self, username: &str, password: &str) -> Result<Session> {
        let (token, profile) = self.issuer.exchange(username, password).await?;
        info!("Password login for {} (userid {})", username, profile.id);

        let profile = UserProfile {
            email: profile.email.or_else(|| Some(username.to_string())),
            ..profile
        };

        Ok(Session {
            token,
            profile,
            google_identity: None,
        })
    }

    pub async fn login_with_google(&self, credential: OAuthCredential) -> Result<LoginOutcome> {
        let (identity, id_token) = self.resolve(credential).await?;
        self.check_gate(&identity.email).await?;

        let Some(record) = self.links.get(&identity.email).await? else {
            info!("No link for {}, linking required", identity.email);
            return Ok(requires_linking(identity, id_token));
        };

        match self
            .issuer
            .exchange(&record.local_username, &record.local_secret)
            .await
        {
            Ok((token, profile)) => {
                info!(
                    "Google login for {} as {}",
                    identity.email, record.local_username
                );
                Ok(LoginOutcome::Authenticated(google_session(
                    token, profile, identity,
                )))
            }
            Err(BridgeError::InvalidLocalCredential { .. }) => {
                warn!(
                    "Stored Moodle credentials for {} no longer valid, removing link",
                    identity.email
                );
                self.links.delete(&identity.email).await?;
                Ok(requires_linking(identity, id_token))
            }
            Err(e) => Err(e),
        }
    }

    /// Link a Google identity to a Moodle account and sign in.
    ///
    /// Re-linking the same email overwrites its record. A Moodle username
    /// already linked to a different email is refused.
    pub async fn link_account(
        &self,
        credential: OAuthCredential,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        let (identity, _) = self.resolve(credential).await?;
        self.check_gate(&identity.email).await?;

        let (token, profile) = self.issuer.exchange(username, password).await?;

        let username = normalize_username(username);
        let links = self.links.get_all().await?;
        if let Some((other_email, _)) = links.iter().find(|(email, record)| {
            normalize_username(&record.local_username) == username && **email != identity.email
        }) {
            warn!(
                "Refusing to link {} to {}: already linked to {}",
                identity.email, username, other_email
            );
            return Err(BridgeError::account_already_linked(other_email.as_str()));
        }

        self.links
            .set(&identity.email, LinkRecord::new(username.as_str(), password))
            .await?;
        info!("Linked {} to Moodle user {}", identity.email, username);

        Ok(google_session(token, profile, identity))
    }

    /// Verify the credential. Codes also yield the ID token they were traded for.
    async fn resolve(
        &self,
        credential: OAuthCredential,
    ) -> Result<(VerifiedIdentity, Option<String>)> {
        match credential {
            OAuthCredential::IdToken(id_token) => {
                let identity = self.verifier.verify_token(&id_token).await?;
                Ok((identity, None))
            }
            OAuthCredential::AuthorizationCode(code) => {
                let exchange = self.verifier.exchange_code(&code).await?;
                Ok((exchange.identity, Some(exchange.id_token)))
            }
        }
    }

    async fn check_gate(&self, email: &str) -> Result<()> {
        let decision = self.gate.check(email).await;
        if decision.allows() {
            return Ok(());
        }

        info!("Email {} not registered in Moodle", email);
        Err(BridgeError::identity_not_recognized(email))
    }
}

/// Moodle trims and lowercases usernames before authenticating, so `Alice`
/// and `alice` name the same account.
fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

fn requires_linking(identity: VerifiedIdentity, id_token: Option<String>) -> LoginOutcome {
    LoginOutcome::RequiresLinking(LinkPrompt { identity, id_token })
}

/// Moodle profile with Google values filling the gaps
fn google_session(token: SessionToken, profile: UserProfile, identity: VerifiedIdentity) -> Session {
    let profile = UserProfile {
        email: profile.email.or_else(|| Some(identity.email.clone())),
        avatar_url: profile.avatar_url.or_else(|| identity.picture_url.clone()),
        ..profile
    };

    Session {
        token,
        profile,
        google_identity: Some(identity),
    }
}
