use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    GoogleConfig, LinksConfig, LoggingConfig, MoodleConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub moodle: MoodleConfig,
    pub google: GoogleConfig,
    pub links: LinksConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for MB_CONFIG_DIR env var, else use ./.moodle-bridge/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load `.env` (config dir first, then cwd) without clobbering the real environment
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply MB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        Self::load_env_file(&config_dir.join(".env"))?;
        Self::load_env_file(Path::new(".env"))?;

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_env_file(path: &Path) -> ConfigErrorResult<()> {
        if !path.exists() {
            return Ok(());
        }

        dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MB_CONFIG_DIR env var > ./.moodle-bridge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.moodle.validate()?;
        self.google.validate()?;
        self.links.validate()?;
        Ok(())
    }

    /// Get absolute path to the link store file.
    pub fn links_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.links.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  moodle: {} (service={}, admin_token={}, rpc={}s, file={}s)",
            self.moodle.base_url,
            self.moodle.service,
            set_or_unset(self.moodle.admin_token.is_some()),
            self.moodle.rpc_timeout_secs,
            self.moodle.file_timeout_secs
        );
        info!(
            "  google: client_id={}, client_secret={}, redirect={}",
            self.google.client_id,
            set_or_unset(self.google.code_flow_enabled()),
            self.google.redirect_uri
        );
        info!(
            "  google: client_app={}, jwks_cache={}s, timeout={}s",
            self.google.client_app_url, self.google.jwks_cache_secs, self.google.http_timeout_secs
        );
        info!("  links: {}", self.links.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MB_SERVER_PORT", &mut self.server.port);

        // Moodle
        Self::apply_env_string("MB_MOODLE_BASE_URL", &mut self.moodle.base_url);
        Self::apply_env_string("MB_MOODLE_SERVICE", &mut self.moodle.service);
        Self::apply_env_option_string("MB_MOODLE_ADMIN_TOKEN", &mut self.moodle.admin_token);
        Self::apply_env_parse(
            "MB_MOODLE_RPC_TIMEOUT_SECS",
            &mut self.moodle.rpc_timeout_secs,
        );
        Self::apply_env_parse(
            "MB_MOODLE_FILE_TIMEOUT_SECS",
            &mut self.moodle.file_timeout_secs,
        );

        // Google
        Self::apply_env_string("MB_GOOGLE_CLIENT_ID", &mut self.google.client_id);
        Self::apply_env_option_string("MB_GOOGLE_CLIENT_SECRET", &mut self.google.client_secret);
        Self::apply_env_string("MB_GOOGLE_REDIRECT_URI", &mut self.google.redirect_uri);
        Self::apply_env_string("MB_GOOGLE_CLIENT_APP_URL", &mut self.google.client_app_url);
        Self::apply_env_parse(
            "MB_GOOGLE_JWKS_CACHE_SECS",
            &mut self.google.jwks_cache_secs,
        );
        Self::apply_env_parse(
            "MB_GOOGLE_HTTP_TIMEOUT_SECS",
            &mut self.google.http_timeout_secs,
        );

        // Links
        Self::apply_env_string("MB_LINKS_PATH", &mut self.links.path);

        // Logging
        Self::apply_env_parse("MB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}

fn set_or_unset(is_set: bool) -> &'static str {
    if is_set { "set" } else { "unset" }
}
