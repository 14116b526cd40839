use std::path::PathBuf;

use ack_config::{AckConfig, ColorMode};
use ack_domain::SearchRequest;
use clap::Parser;

/// Search files for lines matching a regular expression.
#[derive(Parser, Debug)]
#[command(name = "ackmate", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Regular expression to search for.
    pub pattern: String,

    /// Files or directories to search. Defaults to the current directory.
    pub paths: Vec<PathBuf>,

    /// Match case insensitively.
    #[arg(long, short = 'i', overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match case sensitively, even if the config says otherwise.
    #[arg(long, short = 's', overrides_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Treat the pattern as literal text, not a regular expression.
    #[arg(long, short = 'F', visible_alias = "fixed-strings")]
    pub literal: bool,

    /// Only match whole words.
    #[arg(long, short = 'w', visible_alias = "word-regexp")]
    pub word: bool,

    /// Lines of context after each match.
    #[arg(long, short = 'A', value_name = "NUM")]
    pub after_context: Option<usize>,

    /// Lines of context before each match.
    #[arg(long, short = 'B', value_name = "NUM")]
    pub before_context: Option<usize>,

    /// Lines of context before and after each match.
    #[arg(long, short = 'C', value_name = "NUM")]
    pub context: Option<usize>,

    /// Include or (with a leading `!`) exclude file names matching a glob.
    /// May be repeated.
    #[arg(long = "glob", short = 'g', value_name = "GLOB")]
    pub globs: Vec<String>,

    /// Only search files of this type (e.g. `rust`, `py`).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Search hidden files and directories.
    #[arg(long, overrides_with = "no_hidden")]
    pub hidden: bool,

    /// Skip hidden files and directories, even if the config says otherwise.
    #[arg(long, overrides_with = "hidden")]
    pub no_hidden: bool,

    /// Follow symbolic links.
    #[arg(long = "follow", short = 'L', overrides_with = "no_follow")]
    pub follow_links: bool,

    /// Do not follow symbolic links, even if the config says otherwise.
    #[arg(long, overrides_with = "follow_links")]
    pub no_follow: bool,

    /// Stop after this many matching lines per file.
    #[arg(long, short = 'm', value_name = "NUM")]
    pub max_count: Option<u64>,

    /// Hide line numbers.
    #[arg(long, short = 'N')]
    pub no_line_number: bool,

    /// Print one JSON object per result row.
    #[arg(long)]
    pub json: bool,

    /// Print a summary line after the results.
    #[arg(long)]
    pub stats: bool,

    /// When to use colors: auto, always or never.
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Path to a config file to use instead of the user config.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the search request, letting flags override `config`.
    ///
    /// `-A`/`-B` win over `-C`, which wins over the configured context.
    /// Switches turn a setting on and their `--no-*` (or `-s`) counterparts
    /// turn it off; without either the configured value stays.
    pub fn request(&self, config: &AckConfig) -> SearchRequest {
        let context = self.context.unwrap_or(config.context);

        let mut request = config.request(self.pattern.clone());
        request.paths = self.paths.clone();
        request.globs = self.globs.clone();
        request.file_type = self.file_type.clone();
        request.literal = self.literal;
        request.word = self.word;
        request.before_context = self.before_context.unwrap_or(context);
        request.after_context = self.after_context.unwrap_or(context);
        request.case_insensitive =
            switch(self.ignore_case, self.case_sensitive, config.case_insensitive);
        request.hidden = switch(self.hidden, self.no_hidden, config.hidden);
        request.follow_links = switch(self.follow_links, self.no_follow, config.follow_links);
        request.max_count = self.max_count.or(config.max_count);
        request
    }

    pub fn color(&self, config: &AckConfig) -> ColorMode {
        self.color.unwrap_or(config.color)
    }
}

fn switch(on: bool, off: bool, configured: bool) -> bool {
    (configured || on) && !off
}
