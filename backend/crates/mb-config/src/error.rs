use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Server",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Moodle error
    #[track_caller]
    pub fn moodle<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Moodle",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Google error
    #[track_caller]
    pub fn google<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Google",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a links error
    #[track_caller]
    pub fn links<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Links",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
