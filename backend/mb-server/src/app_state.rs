use crate::{ServerError, ServerErrorResult};

use mb_auth::{GoogleVerifier, GoogleVerifierConfig, JWKS_MIN_REFETCH};
use mb_config::Config;
use mb_links::FileLinkStore;
use mb_moodle::{MoodleClient, MoodleClientConfig, MoodleDirectoryGate, MoodleTokenIssuer};
use mb_session::SessionMediator;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use url::Url;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<SessionMediator>,
    pub moodle: Arc<MoodleClient>,
    /// Where the OAuth callback sends the browser
    pub client_app_url: Url,
}

impl AppState {
    pub fn new(mediator: Arc<SessionMediator>, moodle: Arc<MoodleClient>, client_app_url: Url) -> Self {
        Self {
            mediator,
            moodle,
            client_app_url,
        }
    }

    /// Wire the production collaborators from a validated config
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let moodle = Arc::new(MoodleClient::new(MoodleClientConfig {
            base_url: config.moodle.base_url.clone(),
            service: config.moodle.service.clone(),
            rpc_timeout: Duration::from_secs(config.moodle.rpc_timeout_secs),
            file_timeout: Duration::from_secs(config.moodle.file_timeout_secs),
        })?);

        let verifier = Arc::new(GoogleVerifier::new(GoogleVerifierConfig {
            client_id: config.google.client_id.clone(),
            client_secret: config.google.client_secret.clone(),
            redirect_uri: config.google.redirect_uri.clone(),
            auth_url: config.google.auth_url.clone(),
            token_url: config.google.token_url.clone(),
            jwks_url: config.google.jwks_url.clone(),
            jwks_cache_ttl: Duration::from_secs(config.google.jwks_cache_secs),
            jwks_min_refetch: JWKS_MIN_REFETCH,
            http_timeout: Duration::from_secs(config.google.http_timeout_secs),
        })?);
        if !config.google.code_flow_enabled() {
            warn!("Google client secret not set, /auth/google/callback will fail");
        }

        let issuer = Arc::new(MoodleTokenIssuer::new(moodle.clone()));

        if config.moodle.admin_token.is_none() {
            warn!("Moodle admin token not set, identity gate allows every email");
        }
        let gate = Arc::new(MoodleDirectoryGate::new(
            moodle.clone(),
            config.moodle.admin_token.clone(),
        ));

        let links = Arc::new(FileLinkStore::new(config.links_path()?));
        info!("Link store: {}", links.path().display());

        let mediator = Arc::new(SessionMediator::new(verifier, issuer, gate, links));

        let client_app_url =
            Url::parse(&config.google.client_app_url).map_err(|source| ServerError::ClientAppUrl {
                url: config.google.client_app_url.clone(),
                source,
            })?;

        Ok(Self::new(mediator, moodle, client_app_url))
    }
}
