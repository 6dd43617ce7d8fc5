use clap::Parser;
use std::process::ExitCode;

use roster::cli::Cli;
use roster::config::Config;
use roster::utils::error::{AppError, report_error};
use roster::utils::output::configure_color;
use roster::utils::OutputStyle;
use roster::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) => report_error(app_err),
                None => eprintln!("{} {:#}", OutputStyle::error("Error:"), err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(config_path) => Config::load_custom(config_path)?,
        None => Config::load()?,
    };
    configure_color(config.general.color && !cli.no_color);

    cli.execute(config)
}
