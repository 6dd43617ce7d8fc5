use regex::Regex;
use std::sync::LazyLock;

use crate::core::data::MAX_SCORE;
use crate::utils::error::{AppError, AppResult};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic} ]+$").expect("name pattern is valid"));

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern is valid"));

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("score pattern is valid"));

fn invalid(msg: &str) -> AppError {
    AppError::InvalidInput(msg.to_string())
}

/// Identifier for a new record: upper-cased and not yet `taken`
pub fn validate_new_id(raw: &str, taken: impl Fn(&str) -> bool) -> AppResult<String> {
    let id = normalize_id(raw);
    if id.is_empty() {
        return Err(invalid("ID cannot be empty"));
    }
    if taken(&id) {
        return Err(AppError::DuplicateId(id));
    }
    Ok(id)
}

/// Identifiers are compared upper-cased
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn validate_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() || !NAME_PATTERN.is_match(name) {
        return Err(invalid("Name cannot be empty and may only contain letters and spaces"));
    }
    Ok(name.to_string())
}

pub fn validate_enrollment_year(raw: &str) -> AppResult<u16> {
    let year = raw.trim();
    if !YEAR_PATTERN.is_match(year) {
        return Err(invalid("Enrollment year must be a 4-digit number"));
    }
    year.parse()
        .map_err(|_| invalid("Enrollment year must be a 4-digit number"))
}

pub fn validate_score(raw: &str) -> AppResult<u8> {
    let msg = "Module score must be a number between 0 and 100";
    let score = raw.trim();
    if !SCORE_PATTERN.is_match(score) {
        return Err(invalid(msg));
    }
    match score.parse::<u8>() {
        Ok(value) if value <= MAX_SCORE => Ok(value),
        _ => Err(invalid(msg)),
    }
}

/// A 1-based menu number no greater than `count`
pub fn validate_menu_choice(raw: &str, count: usize) -> AppResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(AppError::InvalidInput(format!(
            "Please enter a number from 1 to {}",
            count
        ))),
    }
}

pub fn validate_yes_no(raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(invalid("Enter Y for yes or N for no")),
    }
}
