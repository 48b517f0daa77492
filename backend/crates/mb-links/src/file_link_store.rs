use crate::{StoreError, StoreErrorResult};

use mb_core::{LinkRecord, LinkStore, Result as BridgeResult};

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[cfg(unix)]
const LINKS_FILE_MODE: u32 = 0o600;

/// Link store backed by a single JSON object file.
///
/// The file is read in full on every access and rewritten in full on every
/// mutation; nothing is cached between calls. Mutations from this process are
/// serialized, but another process writing the same file can still clobber
/// them.
pub struct FileLinkStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLinkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_links(&self) -> StoreErrorResult<BTreeMap<String, LinkRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    /// Write through a sibling temp file and rename so a crash mid-write
    /// leaves either the old file or the new one.
    async fn write_links(&self, links: &BTreeMap<String, LinkRecord>) -> StoreErrorResult<()> {
        let json = serde_json::to_string_pretty(links).map_err(StoreError::serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        // A temp file left by a crash keeps its old mode unless recreated
        match tokio::fs::remove_file(&temp_path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                return Err(StoreError::io(&temp_path, e));
            }
            _ => {}
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.create(true).truncate(true).write(true);
        // The file holds Moodle passwords: owner read/write only
        #[cfg(unix)]
        options.mode(LINKS_FILE_MODE);

        let mut file = options
            .open(&temp_path)
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Wrote {} link(s) to {}", links.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("links"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl LinkStore for FileLinkStore {
    async fn get_all(&self) -> BridgeResult<BTreeMap<String, LinkRecord>> {
        Ok(self.read_links().await?)
    }

    async fn set(&self, email: &str, record: LinkRecord) -> BridgeResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut links = self.read_links().await?;
        let replaced = links.insert(email.to_string(), record).is_some();
        self.write_links(&links).await?;

        info!(
            "Link {} for {}",
            if replaced { "replaced" } else { "created" },
            email
        );
        Ok(())
    }

    async fn delete(&self, email: &str) -> BridgeResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut links = self.read_links().await?;
        if links.remove(email).is_none() {
            return Ok(false);
        }
        self.write_links(&links).await?;

        info!("Link removed for {}", email);
        Ok(true)
    }
}
