use std::path::Path;

use ack_services::{WalkFailure, WalkOutput, Walker};
use anyhow::{Context, Result};
use ignore::WalkBuilder;

/// Enumerates files the way ripgrep does: ignore files are honored and
/// entries come back sorted by path. Entries that cannot be read are
/// collected as failures and the walk goes on.
pub struct LocalWalker;

impl LocalWalker {
    pub async fn walk(config: Walker) -> Result<WalkOutput> {
        tokio::task::spawn_blocking(move || Self::walk_blocking(&config))
            .await
            .context("Walker task panicked")
    }

    fn walk_blocking(config: &Walker) -> WalkOutput {
        let walker = WalkBuilder::new(&config.root)
            .hidden(!config.hidden)
            .follow_links(config.follow_links)
            // Honor .gitignore even outside of a git repository
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut output = WalkOutput::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::debug!(error = %error, "Unreadable entry");
                    output.failures.push(failure(&config.root, error));
                    continue;
                }
            };

            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                output.files.push(entry.into_path());
            }
        }

        output
    }
}

/// Splits a walk error into the entry it concerns and a message that does
/// not repeat the path.
fn failure(root: &Path, error: ignore::Error) -> WalkFailure {
    match error {
        ignore::Error::WithPath { path, err } => WalkFailure::new(path, message(*err)),
        ignore::Error::WithDepth { err, .. } => failure(root, *err),
        ignore::Error::Loop { ref child, .. } => WalkFailure::new(child.clone(), error.to_string()),
        other => WalkFailure::new(root, message(other)),
    }
}

fn message(error: ignore::Error) -> String {
    match error {
        ignore::Error::WithDepth { err, .. } => message(*err),
        // Errors converted from walkdir carry the path in their own message;
        // the underlying I/O error does not
        ignore::Error::Io(err) => match std::error::Error::source(&err) {
            Some(source) => source.to_string(),
            None => err.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("src/nested/c.rs"), "c").unwrap();
        fs::write(dir.path().join(".hidden"), "h").unwrap();
        fs::write(dir.path().join(".gitignore"), "ignored.log\n").unwrap();
        fs::write(dir.path().join("ignored.log"), "i").unwrap();
        dir
    }

    fn relative(dir: &TempDir, output: WalkOutput) -> Vec<String> {
        output
            .files
            .into_iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_walk_sorted_and_ignoring() {
        let dir = fixture();

        let actual = relative(&dir, LocalWalker::walk(Walker::new(dir.path())).await.unwrap());

        let expected = vec!["a.txt", "b.txt", "src/nested/c.rs"];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_walk_hidden() {
        let dir = fixture();

        let output = LocalWalker::walk(Walker::new(dir.path()).hidden(true)).await.unwrap();
        let actual = relative(&dir, output);

        assert!(actual.contains(&".hidden".to_string()));
        assert!(actual.contains(&".gitignore".to_string()));
        assert!(!actual.contains(&"ignored.log".to_string()));
    }

    #[tokio::test]
    async fn test_walk_without_failures() {
        let dir = fixture();

        let actual = LocalWalker::walk(Walker::new(dir.path())).await.unwrap();

        assert_eq!(actual.failures, vec![]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dangling_link_is_reported() {
        let dir = fixture();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("missing.txt"), &link).unwrap();

        let actual = LocalWalker::walk(Walker::new(dir.path()).follow_links(true))
            .await
            .unwrap();

        assert_eq!(actual.failures.len(), 1);
        assert_eq!(actual.failures[0].path, link);
        assert!(!actual.failures[0].message.contains(&link.display().to_string()));
        assert_eq!(relative(&dir, actual), vec!["a.txt", "b.txt", "src/nested/c.rs"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dangling_link_is_skipped_without_follow() {
        let dir = fixture();
        std::os::unix::fs::symlink(dir.path().join("missing.txt"), dir.path().join("dangling"))
            .unwrap();

        let actual = LocalWalker::walk(Walker::new(dir.path())).await.unwrap();

        assert_eq!(actual.failures, vec![]);
    }
}
