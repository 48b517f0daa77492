//! Stored association between a Google email and Moodle credentials.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted link. The owning email is the key of the store map, not a
/// field, so the on-disk layout stays `{ "<email>": { moodleUsername, ... } }`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(rename = "moodleUsername")]
    pub local_username: String,
    /// Opaque Moodle password. Never logged, never returned to clients.
    #[serde(rename = "moodlePassword")]
    pub local_secret: String,
    #[serde(rename = "linkedAt")]
    pub linked_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Create a record stamped with the current time
    pub fn new(local_username: impl Into<String>, local_secret: impl Into<String>) -> Self {
        Self {
            local_username: local_username.into(),
            local_secret: local_secret.into(),
            linked_at: Utc::now(),
        }
    }
}

impl fmt::Debug for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRecord")
            .field("local_username", &self.local_username)
            .field("local_secret", &"<redacted>")
            .field("linked_at", &self.linked_at)
            .finish()
    }
}
