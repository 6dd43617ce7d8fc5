//! Core business logic layer
//!
//! This module contains the record types, the traits describing roster
//! access, the seed data and the session operations built on them.

pub mod data;
pub mod operations;
pub mod seed;
pub mod traits;

// Re-export for easier access
pub use data::{Roster, RosterStats, Student};
pub use operations::RosterOperations;
pub use traits::{Choice, RosterCrud, RosterSearch};
