use serde::{Deserialize, Serialize};

/// Google identity extracted from a validated ID token. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    pub email: String,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
}
