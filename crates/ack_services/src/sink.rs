use std::io;

use ack_domain::{MatchRange, SearchResult};
use grep_matcher::Matcher;
use grep_regex::RegexMatcher;
use grep_searcher::{Searcher, Sink, SinkContext, SinkMatch};

/// Collects the rows for one file while grep-searcher walks its lines.
///
/// # Row order
///
/// - The file header is written lazily, right before the first matching or
///   context line, so files without hits produce nothing.
/// - Matching lines carry one range per non-empty match found on the line.
/// - Context lines (before or after) are written as they arrive; the searcher
///   interleaves them with matches in file order.
/// - `context_break()` is called by the searcher between two groups of lines
///   that are not contiguous, and becomes a context break row.
pub(crate) struct ResultSink<'a> {
    matcher: &'a RegexMatcher,
    path: String,
    max_count: Option<u64>,
    matched: u64,
    header_written: bool,
    results: Vec<SearchResult>,
}

impl<'a> ResultSink<'a> {
    pub(crate) fn new(matcher: &'a RegexMatcher, path: String, max_count: Option<u64>) -> Self {
        Self { matcher, path, max_count, matched: 0, header_written: false, results: Vec::new() }
    }

    pub(crate) fn into_results(self) -> Vec<SearchResult> {
        self.results
    }

    fn write_header(&mut self) {
        if !self.header_written {
            self.results.push(SearchResult::filename(self.path.clone()));
            self.header_written = true;
        }
    }

    fn match_ranges(&self, line: &str) -> io::Result<Vec<MatchRange>> {
        let mut ranges = Vec::new();
        self.matcher
            .find_iter(line.as_bytes(), |m| {
                if !m.is_empty() {
                    ranges.push(MatchRange::from(m.start()..m.end()));
                }
                true
            })
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(ranges)
    }
}

fn line_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

fn line_number(number: Option<u64>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

impl Sink for ResultSink<'_> {
    type Error = io::Error;

    fn matched(&mut self, _searcher: &Searcher, mat: &SinkMatch<'_>) -> Result<bool, Self::Error> {
        self.write_header();

        // Ranges are computed on the decoded text so they index `line_content`
        let content = line_text(mat.bytes());
        let ranges = self.match_ranges(&content)?;
        self.results
            .push(SearchResult::matching_line(line_number(mat.line_number()), content, ranges));

        self.matched += 1;
        Ok(self.max_count.is_none_or(|max| self.matched < max))
    }

    fn context(
        &mut self,
        _searcher: &Searcher,
        ctx: &SinkContext<'_>,
    ) -> Result<bool, Self::Error> {
        self.write_header();
        self.results.push(SearchResult::context_line(
            line_number(ctx.line_number()),
            line_text(ctx.bytes()),
        ));
        Ok(true)
    }

    fn context_break(&mut self, _searcher: &Searcher) -> Result<bool, Self::Error> {
        // Only separate groups inside a file; the header already splits files
        if self.header_written {
            self.results.push(SearchResult::context_break());
        }
        Ok(true)
    }
}
