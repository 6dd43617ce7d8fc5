// Menu flows and command handlers
pub mod config;    // Configuration management
pub mod crud;      // Add, update and delete menus
pub mod menu;      // Main menu loop
pub mod query;     // Reports, listing and statistics

pub use config::handle_config_command;
pub use menu::{run_interactive, run_main_menu};
pub use query::{handle_list_command, handle_stats_command};
