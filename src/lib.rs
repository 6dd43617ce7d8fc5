//! Roster - an interactive console tool for managing student records
//!
//! This library provides the record model, the in-memory roster with its
//! search and mutation operations, and the menu flows that drive them.

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod manager;
pub mod utils;

// Re-export core types and traits for easier use
pub use core::{
    data::{Roster, RosterStats, Student},
    operations::RosterOperations,
    traits::{RosterCrud, RosterSearch},
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
