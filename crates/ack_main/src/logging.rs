use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries results. `RUST_LOG` takes
/// precedence over the defaults: warnings only, or debug for the ackmate
/// crates when `verbose` is set.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_directives = if verbose {
        "warn,ack_main=debug,ack_services=debug,ack_infra=debug,ack_config=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}
