use std::io::Write;
use std::sync::Arc;

use ack_config::{AckConfig, ColorMode, ConfigLoader};
use ack_display::GrepFormat;
use ack_domain::SearchResults;
use ack_infra::AckInfra;
use ack_services::AckSearch;
use anyhow::Context;
use tracing::debug;

use crate::Cli;

pub struct UI {
    cli: Cli,
    config: AckConfig,
    search: AckSearch<AckInfra>,
}

impl UI {
    /// Loads configuration (the `--config` file, or the user config) and
    /// prepares the search service.
    pub fn init(cli: Cli) -> anyhow::Result<Self> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::new().file(path),
            None => ConfigLoader::new(),
        };
        let config = loader.load().context("Failed to load configuration")?;
        debug!(?config, "Loaded configuration");

        Ok(Self::new(cli, config))
    }

    pub fn new(cli: Cli, config: AckConfig) -> Self {
        Self { cli, config, search: AckSearch::new(Arc::new(AckInfra::new())) }
    }

    /// Runs the search and writes the results to `out`.
    ///
    /// Returns whether anything matched.
    pub async fn run(&self, out: &mut impl Write) -> anyhow::Result<bool> {
        apply_color(self.cli.color(&self.config));

        let request = self.cli.request(&self.config);
        debug!(?request, "Starting search");
        let results = self.search.search(&request).await?;

        if self.cli.json {
            self.write_json(&results, out)?;
        } else {
            self.write_text(&results, out)?;
        }
        out.flush()?;

        Ok(results.matched_lines() > 0)
    }

    fn write_text(&self, results: &SearchResults, out: &mut impl Write) -> anyhow::Result<()> {
        let format = GrepFormat::new().show_line_numbers(!self.cli.no_line_number);
        out.write_all(format.format(results).as_bytes())?;

        if self.cli.stats {
            if !results.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", GrepFormat::summary(results))?;
        }
        Ok(())
    }

    fn write_json(&self, results: &SearchResults, out: &mut impl Write) -> anyhow::Result<()> {
        for result in results {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn apply_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => console::set_colors_enabled(true),
        ColorMode::Never => console::set_colors_enabled(false),
        ColorMode::Auto => {}
    }
}
