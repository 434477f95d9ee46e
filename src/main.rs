//! rccmd - inspect the RC controller command table from the terminal.

use std::process::ExitCode;

use clap::Parser;
use rccmd::cli::{self, Cli};
use rccmd::config::Config;
use rccmd::{logging, AppError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is configured from the config file, so a config failure is
    // reported before any subscriber exists.
    let config = match &cli.config {
        Some(path) => Config::load_required(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => return report_error(&e.into()),
    };

    if let Err(e) = logging::init(config.settings.log_filter.as_deref()) {
        match logging::log_directory() {
            Some(dir) => eprintln!("Warning: logging to {} disabled: {}", dir.display(), e),
            None => eprintln!("Warning: logging disabled: {}", e),
        }
    }

    let format = cli.format.unwrap_or(config.settings.output);
    let result = cli::execute(&cli.action).and_then(|report| cli::render(&report, format));

    let code = match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            report_error(&e)
        }
    };

    logging::shutdown();
    code
}

fn report_error(e: &AppError) -> ExitCode {
    eprintln!("Error: {}", e.user_message());
    if let Some(action) = e.suggested_action() {
        eprintln!("{}", action);
    }
    ExitCode::FAILURE
}
