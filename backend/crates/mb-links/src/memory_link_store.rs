use mb_core::{LinkRecord, LinkStore, Result as BridgeResult};

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process link store for tests and throwaway deployments
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<BTreeMap<String, LinkRecord>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(links: BTreeMap<String, LinkRecord>) -> Self {
        Self {
            links: RwLock::new(links),
        }
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get_all(&self) -> BridgeResult<BTreeMap<String, LinkRecord>> {
        Ok(self.links.read().await.clone())
    }

    async fn get(&self, email: &str) -> BridgeResult<Option<LinkRecord>> {
        Ok(self.links.read().await.get(email).cloned())
    }

    async fn set(&self, email: &str, record: LinkRecord) -> BridgeResult<()> {
        self.links.write().await.insert(email.to_string(), record);
        Ok(())
    }

    async fn delete(&self, email: &str) -> BridgeResult<bool> {
        Ok(self.links.write().await.remove(email).is_some())
    }
}
