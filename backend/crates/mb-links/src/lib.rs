mod error;
mod file_link_store;
mod memory_link_store;

pub use error::{Result as StoreErrorResult, StoreError};
pub use file_link_store::FileLinkStore;
pub use memory_link_store::MemoryLinkStore;
