use crate::{MoodleClient, MoodleError};

use mb_core::{BridgeError, Result as BridgeResult, SessionToken, SessionTokenIssuer, UserProfile};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

/// Issues Moodle session tokens from username/password.
///
/// A rejected password stops after the token call; the profile lookup only
/// runs once a token exists.
pub struct MoodleTokenIssuer {
    client: Arc<MoodleClient>,
}

impl MoodleTokenIssuer {
    pub fn new(client: Arc<MoodleClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionTokenIssuer for MoodleTokenIssuer {
    async fn exchange(&self, username: &str, secret: &str) -> BridgeResult<(SessionToken, UserProfile)> {
        let token = match self.client.request_token(username, secret).await {
            Ok(token) => token,
            Err(MoodleError::InvalidCredentials { message, .. }) => {
                info!("Moodle rejected credentials for {}: {}", username, message);
                return Err(BridgeError::invalid_local_credential());
            }
            Err(e) => return Err(e.into()),
        };

        let info = self.client.site_info(token.as_str()).await?;
        debug!("Moodle session issued for {} (userid {})", username, info.userid);

        Ok((token, info.into()))
    }
}
