mod config;
mod error;
mod google_config;
mod links_config;
mod log_level;
mod logging_config;
mod moodle_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use google_config::GoogleConfig;
pub use links_config::LinksConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use moodle_config::MoodleConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "MB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".moodle-bridge";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MOODLE_SERVICE: &str = "app_movil";
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FILE_TIMEOUT_SECS: u64 = 20;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_GOOGLE_REDIRECT_URI: &str = "http://localhost:3000/auth/google/callback";
const DEFAULT_CLIENT_APP_URL: &str = "http://localhost:8081";
const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const DEFAULT_JWKS_CACHE_SECS: u64 = 3600;
const MAX_JWKS_CACHE_SECS: u64 = 86_400;
const DEFAULT_GOOGLE_HTTP_TIMEOUT_SECS: u64 = 15;

const DEFAULT_LINKS_FILENAME: &str = "google-links.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
