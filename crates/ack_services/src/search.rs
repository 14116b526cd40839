use std::path::{Path, PathBuf};
use std::sync::Arc;

use ack_domain::{Error, SearchRequest, SearchResult, SearchResults};
use anyhow::Context;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use grep_searcher::{BinaryDetection, Searcher, SearcherBuilder};
use tracing::{debug, info, warn};

use crate::filter::FileFilter;
use crate::sink::ResultSink;
use crate::{FileInfoInfra, FileReaderInfra, WalkOutput, Walker, WalkerInfra};

/// Runs a regex search over files and turns the output into
/// [`SearchResult`] rows: a header per file with hits, matching lines with
/// their match ranges, context lines and context breaks.
///
/// Problems with the request itself (bad pattern, missing path, bad filter)
/// fail the whole search. Problems with a single file or walked entry become
/// error rows and the search moves on.
pub struct AckSearch<I> {
    infra: Arc<I>,
}

impl<I> AckSearch<I> {
    pub fn new(infra: Arc<I>) -> Self {
        Self { infra }
    }
}

impl<I: FileReaderInfra + FileInfoInfra + WalkerInfra> AckSearch<I> {
    pub async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResults> {
        if request.pattern.is_empty() {
            return Err(Error::EmptyPattern.into());
        }

        let matcher = build_matcher(request)?;

        // Without explicit roots the current directory is searched and shown
        // without a "./" prefix
        let implicit_root = request.paths.is_empty();
        let roots = if implicit_root { vec![PathBuf::from(".")] } else { request.paths.clone() };
        let filters = roots
            .iter()
            .map(|root| FileFilter::new(request, root))
            .collect::<ack_domain::Result<Vec<_>>>()?;

        for root in &roots {
            if !self.infra.exists(root).await? {
                return Err(Error::PathNotFound(root.clone()).into());
            }
        }

        let mut searcher = build_searcher(request);
        let mut results = SearchResults::new();

        if request.max_count == Some(0) {
            return Ok(results);
        }

        for (root, filter) in roots.iter().zip(&filters) {
            let WalkOutput { files, failures } = self.files_under(root, request, filter).await?;
            debug!(
                root = %root.display(),
                files = files.len(),
                failures = failures.len(),
                "Collected files to search"
            );

            for failure in failures {
                let display = display_path(&failure.path, implicit_root);
                warn!(
                    path = %failure.path.display(),
                    error = %failure.message,
                    "Failed to walk entry"
                );
                results.push(SearchResult::error(format!("{display}: {}", failure.message)));
            }

            for path in files {
                let display = display_path(&path, implicit_root);
                let rows = self
                    .search_file(&mut searcher, &matcher, &path, display, request)
                    .await;
                results.extend(rows);
            }
        }

        info!(
            matched_lines = results.matched_lines(),
            matched_files = results.matched_files(),
            errors = results.errors(),
            "Search finished"
        );

        Ok(results)
    }

    async fn files_under(
        &self,
        root: &Path,
        request: &SearchRequest,
        filter: &FileFilter,
    ) -> anyhow::Result<WalkOutput> {
        // A root given as a file is searched even if the filters would skip it
        if self.infra.is_file(root).await? {
            return Ok(WalkOutput { files: vec![root.to_path_buf()], failures: Vec::new() });
        }

        let walker = Walker::new(root)
            .hidden(request.hidden)
            .follow_links(request.follow_links);
        let mut output = self
            .infra
            .walk(walker)
            .await
            .with_context(|| format!("Failed to walk directory '{}'", root.display()))?;

        output.files.retain(|path| filter.matches(path));
        Ok(output)
    }

    async fn search_file(
        &self,
        searcher: &mut Searcher,
        matcher: &RegexMatcher,
        path: &Path,
        display: String,
        request: &SearchRequest,
    ) -> Vec<SearchResult> {
        debug!(path = %path.display(), "Searching file");

        let content = match self.infra.read(path).await {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Failed to read file");
                return vec![SearchResult::error(format!("{display}: {error:#}"))];
            }
        };

        let mut sink = ResultSink::new(matcher, display.clone(), request.max_count);
        match searcher.search_slice(matcher, &content, &mut sink) {
            Ok(()) => sink.into_results(),
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Failed to search file");
                vec![SearchResult::error(format!("{display}: {error:#}"))]
            }
        }
    }
}

/// Builds the regex matcher for a request.
fn build_matcher(request: &SearchRequest) -> ack_domain::Result<RegexMatcher> {
    let pattern = if request.literal {
        regex::escape(&request.pattern)
    } else {
        request.pattern.clone()
    };

    let mut builder = RegexMatcherBuilder::new();
    builder
        .case_insensitive(request.case_insensitive)
        .word(request.word)
        .line_terminator(Some(b'\n'));

    builder.build(&pattern).map_err(|e| Error::InvalidPattern {
        pattern: request.pattern.clone(),
        message: e.to_string(),
    })
}

fn build_searcher(request: &SearchRequest) -> Searcher {
    SearcherBuilder::new()
        .line_number(true)
        .before_context(request.before_context)
        .after_context(request.after_context)
        .binary_detection(BinaryDetection::quit(b'\x00'))
        .build()
}

fn display_path(path: &Path, implicit_root: bool) -> String {
    let path = if implicit_root { path.strip_prefix(".").unwrap_or(path) } else { path };
    path.display().to_string()
}
