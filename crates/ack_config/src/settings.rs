use ack_domain::SearchRequest;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// When to emit ANSI colors.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// User defaults for searches. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(into, strip_option)]
#[serde(default)]
pub struct AckConfig {
    /// Lines of context shown before and after each match.
    pub context: usize,
    pub case_insensitive: bool,
    pub hidden: bool,
    pub follow_links: bool,
    pub color: ColorMode,
    pub max_count: Option<u64>,
}

impl AckConfig {
    /// Seeds a request with the configured defaults.
    pub fn request(&self, pattern: impl Into<String>) -> SearchRequest {
        let mut request = SearchRequest::new(pattern)
            .context(self.context)
            .case_insensitive(self.case_insensitive)
            .hidden(self.hidden)
            .follow_links(self.follow_links);
        request.max_count = self.max_count;
        request
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_request_carries_defaults() {
        let fixture = AckConfig::default().context(2usize).hidden(true).max_count(5u64);

        let actual = fixture.request("todo");

        let expected = SearchRequest::new("todo").context(2).hidden(true).max_count(5u64);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::Always.to_string(), "always");
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
