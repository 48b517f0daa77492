use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FILE_TIMEOUT_SECS, DEFAULT_MOODLE_SERVICE,
    DEFAULT_RPC_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoodleConfig {
    /// Site root, e.g. `https://campus.example.edu`
    pub base_url: String,
    /// Web-service name passed to `/login/token.php`
    pub service: String,
    /// Administrator token for the identity gate. None disables the gate.
    pub admin_token: Option<String>,
    pub rpc_timeout_secs: u64,
    pub file_timeout_secs: u64,
}

impl Default for MoodleConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            service: String::from(DEFAULT_MOODLE_SERVICE),
            admin_token: None,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            file_timeout_secs: DEFAULT_FILE_TIMEOUT_SECS,
        }
    }
}

impl MoodleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::moodle(
                "moodle.base_url is required (set MB_MOODLE_BASE_URL)",
            ));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::moodle(format!("moodle.base_url is not a valid URL: {}", e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::moodle(format!(
                "moodle.base_url must be http or https, got {}",
                url.scheme()
            )));
        }

        if self.service.trim().is_empty() {
            return Err(ConfigError::moodle("moodle.service must not be empty"));
        }

        check_timeout("moodle.rpc_timeout_secs", self.rpc_timeout_secs)?;
        check_timeout("moodle.file_timeout_secs", self.file_timeout_secs)?;

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn site_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

pub(crate) fn check_timeout(name: &str, value: u64) -> ConfigErrorResult<()> {
    if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&value) {
        return Err(ConfigError::config(format!(
            "{} must be {}-{}, got {}",
            name, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, value
        )));
    }
    Ok(())
}
