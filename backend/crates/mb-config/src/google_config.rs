use crate::moodle_config::check_timeout;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLIENT_APP_URL, DEFAULT_GOOGLE_AUTH_URL,
    DEFAULT_GOOGLE_HTTP_TIMEOUT_SECS, DEFAULT_GOOGLE_JWKS_URL, DEFAULT_GOOGLE_REDIRECT_URI,
    DEFAULT_GOOGLE_TOKEN_URL, DEFAULT_JWKS_CACHE_SECS, MAX_JWKS_CACHE_SECS,
};

use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    /// OAuth client id; also the required ID token audience
    pub client_id: String,
    /// Only needed for the authorization-code flow
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    /// Where the OAuth callback sends the browser afterwards
    pub client_app_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub jwks_url: String,
    pub jwks_cache_secs: u64,
    pub http_timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            redirect_uri: String::from(DEFAULT_GOOGLE_REDIRECT_URI),
            client_app_url: String::from(DEFAULT_CLIENT_APP_URL),
            auth_url: String::from(DEFAULT_GOOGLE_AUTH_URL),
            token_url: String::from(DEFAULT_GOOGLE_TOKEN_URL),
            jwks_url: String::from(DEFAULT_GOOGLE_JWKS_URL),
            jwks_cache_secs: DEFAULT_JWKS_CACHE_SECS,
            http_timeout_secs: DEFAULT_GOOGLE_HTTP_TIMEOUT_SECS,
        }
    }
}

impl GoogleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::google(
                "google.client_id is required (set MB_GOOGLE_CLIENT_ID)",
            ));
        }

        for (name, value) in [
            ("google.redirect_uri", &self.redirect_uri),
            ("google.client_app_url", &self.client_app_url),
            ("google.auth_url", &self.auth_url),
            ("google.token_url", &self.token_url),
            ("google.jwks_url", &self.jwks_url),
        ] {
            Url::parse(value).map_err(|e| {
                ConfigError::google(format!("{} is not a valid URL: {}", name, e))
            })?;
        }

        if self.jwks_cache_secs > MAX_JWKS_CACHE_SECS {
            return Err(ConfigError::google(format!(
                "google.jwks_cache_secs must be 0-{}, got {}",
                MAX_JWKS_CACHE_SECS, self.jwks_cache_secs
            )));
        }

        check_timeout("google.http_timeout_secs", self.http_timeout_secs)?;

        Ok(())
    }

    /// The code flow needs a client secret to trade codes for tokens
    pub fn code_flow_enabled(&self) -> bool {
        self.client_secret
            .as_deref()
            .is_some_and(|secret| !secret.trim().is_empty())
    }
}
