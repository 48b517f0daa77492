use crate::{LinkRecord, Result};

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Persistent mapping from Google email to linked Moodle credentials.
///
/// Stores guarantee one record per email. The "one email per Moodle username"
/// rule is enforced by the session mediator when a link is created.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Every link, keyed by email
    async fn get_all(&self) -> Result<BTreeMap<String, LinkRecord>>;

    async fn get(&self, email: &str) -> Result<Option<LinkRecord>> {
        Ok(self.get_all().await?.remove(email))
    }

    /// Insert or overwrite the link for `email`
    async fn set(&self, email: &str, record: LinkRecord) -> Result<()>;

    /// Remove the link for `email`. Returns whether one existed.
    async fn delete(&self, email: &str) -> Result<bool>;
}
