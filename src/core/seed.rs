//! Sample records the roster starts with

use serde::Deserialize;

use crate::core::data::{Roster, Student};
use crate::utils::error::{AppError, AppResult};

const SAMPLE_ROSTER: &str = include_str!("../../data/sample_roster.toml");

#[derive(Deserialize)]
struct SeedFile {
    students: Vec<Student>,
}

/// Parse a roster from `[[students]]` TOML tables
pub fn parse_roster(content: &str) -> AppResult<Roster> {
    let seed: SeedFile = toml::from_str(content)
        .map_err(|e| AppError::System(format!("Failed to parse sample roster: {}", e)))?;
    Roster::from_students(seed.students)
}

/// The ten built-in sample records
pub fn sample_roster() -> AppResult<Roster> {
    parse_roster(SAMPLE_ROSTER)
}
