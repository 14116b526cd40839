use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::MatchRange;

/// The role a [`SearchResult`] plays in a result listing.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResultKind {
    Error,
    Filename,
    MatchingLine,
    Context,
    ContextBreak,
}

impl ResultKind {
    /// True for kinds that stand for a line of a searched file.
    pub fn is_line(&self) -> bool {
        matches!(self, Self::MatchingLine | Self::Context)
    }
}

/// One row of search output.
///
/// Instances are immutable and only come out of the named constructors (or
/// deserialization, which enforces the same shape). Fields that do not apply
/// to a kind are left empty: only [`ResultKind::MatchingLine`] carries match
/// ranges, and only line kinds carry a line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSearchResult")]
pub struct SearchResult {
    kind: ResultKind,
    line_number: String,
    line_content: String,
    match_ranges: Vec<MatchRange>,
}

impl SearchResult {
    fn new(
        kind: ResultKind,
        line_number: String,
        line_content: String,
        match_ranges: Vec<MatchRange>,
    ) -> Self {
        Self { kind, line_number, line_content, match_ranges }
    }

    /// An upstream failure to be displayed in place of results.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Error, String::new(), message.into(), Vec::new())
    }

    /// Header announcing the file the following lines belong to.
    pub fn filename(name: impl Into<String>) -> Self {
        Self::new(ResultKind::Filename, String::new(), name.into(), Vec::new())
    }

    /// Separator between two non-contiguous blocks of lines.
    pub fn context_break() -> Self {
        Self::new(ResultKind::ContextBreak, String::new(), String::new(), Vec::new())
    }

    pub fn context_line(line_number: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(ResultKind::Context, line_number.into(), content.into(), Vec::new())
    }

    /// A line that matched the pattern. `ranges` are stored in the order
    /// given and are not checked against `content`.
    pub fn matching_line<R>(
        line_number: impl Into<String>,
        content: impl Into<String>,
        ranges: impl IntoIterator<Item = R>,
    ) -> Self
    where
        R: Into<MatchRange>,
    {
        Self::new(
            ResultKind::MatchingLine,
            line_number.into(),
            content.into(),
            ranges.into_iter().map(Into::into).collect(),
        )
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn line_number(&self) -> &str {
        &self.line_number
    }

    pub fn line_content(&self) -> &str {
        &self.line_content
    }

    pub fn match_ranges(&self) -> &[MatchRange] {
        &self.match_ranges
    }

    pub fn has_line_number(&self) -> bool {
        !self.line_number.is_empty()
    }

    /// Text selected by each match range, skipping ranges that do not fit the
    /// content.
    pub fn matched_text(&self) -> impl Iterator<Item = &str> + '_ {
        self.match_ranges
            .iter()
            .filter_map(|range| range.slice(&self.line_content))
    }
}

#[derive(Deserialize)]
struct RawSearchResult {
    kind: ResultKind,
    #[serde(default)]
    line_number: String,
    #[serde(default)]
    line_content: String,
    #[serde(default)]
    match_ranges: Vec<MatchRange>,
}

impl TryFrom<RawSearchResult> for SearchResult {
    type Error = String;

    fn try_from(raw: RawSearchResult) -> Result<Self, Self::Error> {
        let RawSearchResult { kind, line_number, line_content, match_ranges } = raw;

        if kind != ResultKind::MatchingLine && !match_ranges.is_empty() {
            return Err(format!("{kind} result cannot carry match ranges"));
        }
        if !kind.is_line() && !line_number.is_empty() {
            return Err(format!("{kind} result cannot carry a line number"));
        }
        if kind == ResultKind::ContextBreak && !line_content.is_empty() {
            return Err("context_break result cannot carry content".to_string());
        }

        Ok(Self::new(kind, line_number, line_content, match_ranges))
    }
}
