use std::path::Path;

use ack_services::{FileInfoInfra, FileReaderInfra, WalkOutput, Walker, WalkerInfra};

use crate::fs::LocalFs;
use crate::walker::LocalWalker;

/// Local filesystem implementation of the infrastructure the search service
/// depends on.
#[derive(Clone, Default)]
pub struct AckInfra;

impl AckInfra {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for AckInfra {
    async fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        LocalFs::read(path).await
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for AckInfra {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(LocalFs::is_file(path).await)
    }

    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(LocalFs::exists(path).await)
    }
}

#[async_trait::async_trait]
impl WalkerInfra for AckInfra {
    async fn walk(&self, config: Walker) -> anyhow::Result<WalkOutput> {
        LocalWalker::walk(config).await
    }
}
