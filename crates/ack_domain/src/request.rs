use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Parameters of a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(into, strip_option)]
pub struct SearchRequest {
    /// Regular expression, or literal text when `literal` is set.
    pub pattern: String,

    /// Files or directories to search. Empty means the current directory.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,

    #[serde(default)]
    pub case_insensitive: bool,

    /// Treat the pattern as fixed text rather than a regular expression.
    #[serde(default)]
    pub literal: bool,

    /// Only match on word boundaries.
    #[serde(default)]
    pub word: bool,

    #[serde(default)]
    pub before_context: usize,

    #[serde(default)]
    pub after_context: usize,

    /// Glob overrides in `ignore` syntax, matched against the path relative
    /// to each search root; a leading `!` excludes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub globs: Vec<String>,

    /// File type name as known to `ignore` (e.g. `rust`, `py`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub follow_links: bool,

    /// Stop searching a file after this many matching lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u64>,
}

impl SearchRequest {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), ..Default::default() }
    }

    /// Sets the same number of lines before and after each match.
    pub fn context(self, lines: usize) -> Self {
        self.before_context(lines).after_context(lines)
    }

    pub fn has_context(&self) -> bool {
        self.before_context > 0 || self.after_context > 0
    }

    /// Adds a search root.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds a glob override.
    pub fn glob(mut self, glob: impl Into<String>) -> Self {
        self.globs.push(glob.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let actual = SearchRequest::new("needle");
        assert_eq!(actual.pattern, "needle");
        assert!(actual.paths.is_empty());
        assert!(!actual.has_context());
        assert_eq!(actual.max_count, None);
    }

    #[test]
    fn test_context_sets_both_sides() {
        let actual = SearchRequest::new("x").context(2);
        assert_eq!(actual.before_context, 2);
        assert_eq!(actual.after_context, 2);
        assert!(actual.has_context());
    }

    #[test]
    fn test_builder_chain() {
        let actual = SearchRequest::new("fn")
            .path("src")
            .path("tests")
            .glob("*.rs")
            .file_type("rust")
            .max_count(3u64)
            .case_insensitive(true);

        let expected = SearchRequest {
            pattern: "fn".to_string(),
            paths: vec![PathBuf::from("src"), PathBuf::from("tests")],
            globs: vec!["*.rs".to_string()],
            file_type: Some("rust".to_string()),
            max_count: Some(3),
            case_insensitive: true,
            ..Default::default()
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_deserialize_minimal() {
        let actual: SearchRequest = serde_json::from_str(r#"{"pattern":"todo"}"#).unwrap();
        let expected = SearchRequest::new("todo");
        assert_eq!(actual, expected);
    }
}
