use crate::{MoodleClient, RpcParams};

use mb_core::{GateDecision, IdentityGate};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

/// Checks that an email belongs to a Moodle account using the admin token.
///
/// Fails open: no admin token, a transport error or a Moodle exception all
/// yield `GateDecision::Unavailable`.
pub struct MoodleDirectoryGate {
    client: Arc<MoodleClient>,
    admin_token: Option<String>,
}

impl MoodleDirectoryGate {
    pub fn new(client: Arc<MoodleClient>, admin_token: Option<String>) -> Self {
        Self {
            client,
            admin_token: admin_token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl IdentityGate for MoodleDirectoryGate {
    async fn check(&self, email: &str) -> GateDecision {
        let Some(ref admin_token) = self.admin_token else {
            warn!("Admin token not configured, skipping Moodle email check");
            return GateDecision::Unavailable("admin token not configured".to_string());
        };

        let params = RpcParams::new()
            .with("field", "email")
            .with("values[0]", email);

        match self
            .client
            .call(admin_token, "core_user_get_users_by_field", params)
            .await
        {
            Ok(Value::Array(users)) if users.is_empty() => {
                debug!("No Moodle account for {}", email);
                GateDecision::NotRecognized
            }
            Ok(Value::Array(_)) => GateDecision::Recognized,
            Ok(other) => {
                warn!("Unexpected Moodle user lookup response: {}", other);
                GateDecision::Unavailable("unexpected user lookup response".to_string())
            }
            Err(e) => {
                warn!("Moodle email check failed, allowing login: {}", e);
                GateDecision::Unavailable(e.to_string())
            }
        }
    }
}
