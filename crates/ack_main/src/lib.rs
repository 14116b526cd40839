mod cli;
mod logging;
mod ui;

pub use cli::Cli;
pub use logging::init_tracing;
pub use ui::UI;
