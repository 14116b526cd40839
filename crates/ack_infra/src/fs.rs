use std::path::Path;

use anyhow::{Context, Result};

pub struct LocalFs;

impl LocalFs {
    pub async fn read(path: &Path) -> Result<Vec<u8>> {
        // The caller prefixes the path when reporting, keep the message short
        tokio::fs::read(path).await.context("Failed to read file")
    }

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    pub async fn is_file(path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
