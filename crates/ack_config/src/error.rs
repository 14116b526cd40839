use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

pub type Result<A> = std::result::Result<A, ConfigError>;
