use std::path::PathBuf;

use thiserror::Error;

/// Problems with a search request that stop the search before it starts.
///
/// Failures on individual files are not errors at this level: they are
/// reported as [`crate::SearchResult::error`] rows.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Search pattern is empty")]
    EmptyPattern,

    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid glob '{glob}': {message}")]
    InvalidGlob { glob: String, message: String },

    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

pub type Result<A> = std::result::Result<A, Error>;
