use std::path::PathBuf;

use derive_setters::Setters;

/// Settings for enumerating the files below a search root.
///
/// Ignore files (`.gitignore`, `.ignore`) are always honored; glob and file
/// type filtering happens after the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct Walker {
    /// Directory to walk.
    pub root: PathBuf,
    /// Include hidden files and directories.
    pub hidden: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Default::default() }
    }
}

/// Everything a walk produced: the files to search and the entries that
/// could not be read along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutput {
    pub files: Vec<PathBuf>,
    pub failures: Vec<WalkFailure>,
}

/// An entry the walk could not read, such as an unreadable directory, a
/// dangling symbolic link or a link loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkFailure {
    /// The failing entry, or the walk root when the entry is unknown.
    pub path: PathBuf,
    pub message: String,
}

impl WalkFailure {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}
