use crate::{AuthError, Result as AuthErrorResult};

use mb_core::VerifiedIdentity;

use serde::{Deserialize, Deserializer, Serialize};

/// The ID token claims this service reads. Signature, `aud`, `iss` and `exp`
/// are checked by the decoder before these are looked at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    /// Google has sent this both as a bool and as "true"/"false"
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        match self.email.as_deref() {
            Some(email) if !email.trim().is_empty() => {}
            _ => return Err(AuthError::invalid_claim("email", "email claim is required")),
        }

        if self.email_verified == Some(false) {
            return Err(AuthError::invalid_claim("email_verified", "email is not verified"));
        }

        Ok(())
    }

    /// Identity for an already validated token
    pub fn into_identity(self) -> VerifiedIdentity {
        VerifiedIdentity {
            email: self.email.unwrap_or_default(),
            display_name: self.name.filter(|n| !n.is_empty()),
            picture_url: self.picture.filter(|p| !p.is_empty()),
        }
    }
}

fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    Ok(match Option::<BoolOrString>::deserialize(deserializer)? {
        Some(BoolOrString::Bool(b)) => Some(b),
        Some(BoolOrString::String(s)) => Some(!s.eq_ignore_ascii_case("false")),
        None => None,
    })
}
