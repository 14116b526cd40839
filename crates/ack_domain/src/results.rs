use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{ResultKind, SearchResult};

/// The ordered list of rows a search produced.
///
/// Owns its [`SearchResult`]s; clearing or replacing the list drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults(Vec<SearchResult>);

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: SearchResult) {
        self.0.push(result);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops every current row and takes `results` in their place.
    pub fn replace(&mut self, results: impl IntoIterator<Item = SearchResult>) {
        self.0.clear();
        self.0.extend(results);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matched_lines(&self) -> usize {
        self.count(ResultKind::MatchingLine)
    }

    pub fn errors(&self) -> usize {
        self.count(ResultKind::Error)
    }

    /// Number of file headers that are followed by at least one matching line
    /// before the next header.
    pub fn matched_files(&self) -> usize {
        let mut files = 0;
        let mut in_file = false;
        let mut counted = false;

        for result in &self.0 {
            match result.kind() {
                ResultKind::Filename => {
                    in_file = true;
                    counted = false;
                }
                ResultKind::MatchingLine if in_file && !counted => {
                    files += 1;
                    counted = true;
                }
                _ => {}
            }
        }

        files
    }

    fn count(&self, kind: ResultKind) -> usize {
        self.0.iter().filter(|result| result.kind() == kind).count()
    }
}

impl Extend<SearchResult> for SearchResults {
    fn extend<T: IntoIterator<Item = SearchResult>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<SearchResult> for SearchResults {
    fn from_iter<T: IntoIterator<Item = SearchResult>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SearchResults {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
