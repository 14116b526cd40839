use std::path::Path;

use crate::{WalkOutput, Walker};

/// Reads file contents for the searcher.
#[async_trait::async_trait]
pub trait FileReaderInfra: Send + Sync {
    /// Returns the raw bytes of the file at `path`.
    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}

#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool>;
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;
}

#[async_trait::async_trait]
pub trait WalkerInfra: Send + Sync {
    /// Lists the files below `config.root`, sorted by path. Returned paths
    /// are `config.root` joined with the relative file path. Entries that
    /// cannot be read are reported as failures instead of ending the walk.
    async fn walk(&self, config: Walker) -> anyhow::Result<WalkOutput>;
}
