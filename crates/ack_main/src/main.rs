use std::process::ExitCode;

use ack_main::{Cli, UI, init_tracing};
use clap::Parser;
use console::style;

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    let cli = Cli::parse();

    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    if let Err(error) = init_tracing(cli.verbose) {
        eprintln!("{}", style(format!("warning: {error:#}")).yellow());
    }

    let result = match UI::init(cli) {
        Ok(ui) => ui.run(&mut std::io::stdout().lock()).await,
        Err(error) => Err(error),
    };

    // grep convention: 0 when something matched, 1 when nothing did, 2 on error
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("{}", style(format!("error: {error:#}")).red());
            ExitCode::from(2)
        }
    }
}
