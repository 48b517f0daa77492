use mb_core::BridgeError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// The file exists but is not a valid link map. Never treated as empty,
    /// since the next write would erase every link.
    #[error("Link file {path} is corrupt: {source} {location}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize links: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for BridgeError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        BridgeError::storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
