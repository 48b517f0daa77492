use crate::{ConfigError, ConfigErrorResult, DEFAULT_LINKS_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Link file, relative to the config dir
    pub path: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_LINKS_FILENAME),
        }
    }
}

impl LinksConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::links("links.path must not be empty"));
        }

        // Keep the link file inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::links(
                "links.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
