pub mod error;
pub mod identity_gate;
pub mod identity_verifier;
pub mod link_store;
pub mod models;
pub mod session_token_issuer;

pub use error::{BridgeError, Result};
pub use identity_gate::IdentityGate;
pub use identity_verifier::IdentityVerifier;
pub use link_store::LinkStore;
pub use models::code_exchange::CodeExchange;
pub use models::gate_decision::GateDecision;
pub use models::link_record::LinkRecord;
pub use models::login_outcome::{LinkPrompt, LoginOutcome};
pub use models::oauth_credential::OAuthCredential;
pub use models::session::Session;
pub use models::session_token::SessionToken;
pub use models::user_profile::UserProfile;
pub use models::verified_identity::VerifiedIdentity;
pub use session_token_issuer::SessionTokenIssuer;

#[cfg(test)]
mod tests;
