use std::ops::Range;

use ack_domain::{MatchRange, ResultKind, SearchResult, SearchResults};
use console::{Style, style};
use derive_setters::Setters;

/// Renders search results as grep-style terminal output.
///
/// ```text
/// src/lib.rs
/// 11-fn helper() {
/// 12:    let foo = bar(foo);
/// --
/// 40:    foo()
/// ```
///
/// Matching lines use `:` after the line number and context lines use `-`,
/// match ranges are highlighted, files are separated by a blank line.
#[derive(Clone, Setters)]
#[setters(into)]
pub struct GrepFormat {
    path_style: Style,
    line_number_style: Style,
    match_style: Style,
    context_style: Style,
    error_style: Style,
    show_line_numbers: bool,
}

impl Default for GrepFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl GrepFormat {
    pub fn new() -> Self {
        Self {
            path_style: Style::new().bold(),
            line_number_style: Style::new().dim(),
            match_style: Style::new().yellow().bold(),
            context_style: Style::new().dim(),
            error_style: Style::new().red(),
            show_line_numbers: true,
        }
    }

    /// Renders every row, one per line.
    pub fn format<'a>(&self, results: impl IntoIterator<Item = &'a SearchResult>) -> String {
        let mut output = String::new();

        for result in results {
            if result.kind() == ResultKind::Filename && !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&self.format_result(result));
            output.push('\n');
        }

        output
    }

    /// Renders a single row without a trailing newline.
    pub fn format_result(&self, result: &SearchResult) -> String {
        match result.kind() {
            ResultKind::Error => self
                .error_style
                .apply_to(format!("error: {}", result.line_content()))
                .to_string(),
            ResultKind::Filename => self.path_style.apply_to(result.line_content()).to_string(),
            ResultKind::ContextBreak => self.context_style.apply_to("--").to_string(),
            ResultKind::MatchingLine => format!(
                "{}{}",
                self.gutter(result, ':'),
                highlight(
                    result.line_content(),
                    result.match_ranges(),
                    &self.match_style,
                    &Style::new(),
                )
            ),
            ResultKind::Context => format!(
                "{}{}",
                self.gutter(result, '-'),
                self.context_style.apply_to(result.line_content())
            ),
        }
    }

    /// One-line summary such as `3 matches in 2 files`.
    pub fn summary(results: &SearchResults) -> String {
        let lines = results.matched_lines();
        let files = results.matched_files();
        let mut summary = format!(
            "{} {} in {} {}",
            lines,
            plural(lines, "match", "matches"),
            files,
            plural(files, "file", "files")
        );

        let errors = results.errors();
        if errors > 0 {
            summary.push_str(&format!(", {} {}", errors, plural(errors, "error", "errors")));
        }

        style(summary).dim().to_string()
    }

    fn gutter(&self, result: &SearchResult, separator: char) -> String {
        if !self.show_line_numbers || !result.has_line_number() {
            return String::new();
        }
        self.line_number_style
            .apply_to(format!("{}{}", result.line_number(), separator))
            .to_string()
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Applies `matched` to the ranges of `content` and `rest` to everything
/// else. Ranges are clamped to the content; overlapping ranges are merged,
/// and ranges that split a character are dropped.
fn highlight(content: &str, ranges: &[MatchRange], matched: &Style, rest: &Style) -> String {
    let len = content.len();
    let mut spans: Vec<Range<usize>> = ranges
        .iter()
        .map(|range| range.start.min(len)..range.end().min(len))
        .filter(|span| {
            !span.is_empty()
                && content.is_char_boundary(span.start)
                && content.is_char_boundary(span.end)
        })
        .collect();
    spans.sort_by_key(|span| span.start);

    let mut output = String::new();
    let mut cursor = 0;
    for span in spans {
        let start = span.start.max(cursor);
        if start >= span.end {
            continue;
        }
        if start > cursor {
            output.push_str(&rest.apply_to(&content[cursor..start]).to_string());
        }
        output.push_str(&matched.apply_to(&content[start..span.end]).to_string());
        cursor = span.end;
    }
    if cursor < len {
        output.push_str(&rest.apply_to(&content[cursor..]).to_string());
    }

    output
}
