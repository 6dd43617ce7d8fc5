use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::core::data::SearchColumn;
use crate::manager;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "An interactive console tool for managing student records")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub debug: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Start with an empty roster instead of the sample records")]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn execute(self, config: Config) -> Result<()> {
        let session = self.session_config(&config);

        match self.command {
            None | Some(Commands::Menu) => manager::run_interactive(&session),
            Some(Commands::List(args)) => manager::handle_list_command(&session, &args),
            Some(Commands::Stats) => manager::handle_stats_command(&session),
            // Shows and resets the file itself, so command-line overrides stay out
            Some(Commands::Config(args)) => {
                manager::handle_config_command(&config, self.config.as_deref(), args.command)
            }
        }
    }

    /// Configuration used to build the roster, with `--empty` applied
    pub fn session_config(&self, config: &Config) -> Config {
        let mut session = config.clone();
        if self.empty {
            session.general.seed_sample_data = false;
        }
        session
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Print student records
    List(ListArgs),

    /// Show roster statistics
    Stats,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, value_enum, help = "Column to search in")]
    pub column: Option<SearchColumn>,

    #[arg(short, long, requires = "column", help = "Keyword to look for in the column")]
    pub keyword: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ListFormat>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Table,
    Simple,
    Json,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_menu() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.empty);
        assert!(!cli.debug);
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::try_parse_from([
            "roster", "--empty", "list", "--column", "enrollment-year", "-k", "2021", "-f", "json",
        ])
        .unwrap();

        assert!(cli.empty);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.column, Some(SearchColumn::EnrollmentYear));
                assert_eq!(args.keyword.as_deref(), Some("2021"));
                assert_eq!(args.format, Some(ListFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_keyword_requires_column() {
        assert!(Cli::try_parse_from(["roster", "list", "--keyword", "andi"]).is_err());
    }

    #[test]
    fn test_empty_flag_only_changes_session_config() {
        let cli = Cli::try_parse_from(["roster", "--empty", "config", "show"]).unwrap();
        let config = Config::default();

        let session = cli.session_config(&config);
        assert!(!session.general.seed_sample_data);
        assert!(config.general.seed_sample_data);

        let cli = Cli::try_parse_from(["roster", "stats"]).unwrap();
        assert_eq!(cli.session_config(&config), config);
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["roster", "-c", "/tmp/roster.toml", "config", "reset"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/roster.toml")));
        match cli.command {
            Some(Commands::Config(args)) => assert_eq!(args.command, Some(ConfigCommands::Reset)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
