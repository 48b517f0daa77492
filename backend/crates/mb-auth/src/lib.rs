use std::time::Duration;

pub mod error;
pub mod google_claims;
pub mod google_verifier;
pub mod jwks_cache;

pub use error::{AuthError, Result};
pub use google_claims::GoogleClaims;
pub use google_verifier::{GoogleVerifier, GoogleVerifierConfig};
pub use jwks_cache::JwksCache;

/// Accepted `iss` values for Google ID tokens
pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Default shortest gap between JWKS refetches triggered by an unknown `kid`
pub const JWKS_MIN_REFETCH: Duration = Duration::from_secs(60);

const OAUTH_SCOPES: &str = "openid email profile";

#[cfg(test)]
mod tests;
