// Configuration operations

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::{AppResult, FlowResult};
use crate::utils::interactive::Console;
use crate::utils::output::OutputStyle;

pub fn handle_config_command(
    config: &Config,
    custom_path: Option<&Path>,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let path = custom_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_file_path);

    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, &path),
        Some(ConfigCommands::Path) => {
            println!("{}", path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => {
            let mut console = Console::stdio();
            reset_config(&mut console, &path)
                .with_context(|| format!("Failed to reset {}", path.display()))
        }
        None => handle_config_help(&path),
    }
}

fn handle_show_command(config: &Config, path: &Path) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_config(&mut stdout, config, path)
}

fn write_config(out: &mut impl Write, config: &Config, path: &Path) -> Result<()> {
    writeln!(out, "⚙️  {}", OutputStyle::title("Roster Configuration"))?;
    writeln!(out, "{}", OutputStyle::header_separator())?;
    writeln!(out, "File: {}", OutputStyle::muted(&path.display().to_string()))?;
    writeln!(out)?;

    let content = toml::to_string_pretty(config).context("Failed to render configuration")?;
    write!(out, "{}", content)?;
    Ok(())
}

fn handle_config_help(path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  roster config show    - Show current configuration");
    println!("  roster config path    - Print the configuration file location");
    println!("  roster config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", path.display());
    Ok(())
}

/// Overwrite the file at `path` with the default configuration once confirmed
fn reset_config<R: BufRead, W: Write>(console: &mut Console<R, W>, path: &Path) -> AppResult<()> {
    let confirmed = console.prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )?;
    if !confirmed {
        return console.report(FlowResult::Cancelled("Reset cancelled.".to_string()));
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "configuration reset");
    console.report(FlowResult::Success(
        "Configuration reset to defaults!".to_string(),
    ))
}
