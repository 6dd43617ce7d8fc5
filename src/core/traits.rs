//! Core trait definitions for roster management
//!
//! These traits define the operations that can be performed on the roster,
//! so the menus only depend on an interface and not on the storage behind it.

use crate::core::data::{
    DeleteCriterion, FieldValue, RosterStats, SearchQuery, Student,
};
use crate::utils::error::AppResult;

/// A fixed set of options presented as a numbered menu
///
/// Variants are listed in menu order, starting at 1.
pub trait Choice: Copy + Eq + std::fmt::Display + 'static {
    /// Every variant, in menu order
    fn all() -> &'static [Self];

    /// Human readable label shown in menus and tables
    fn label(&self) -> &'static str;

    /// Look up a variant by its 1-based menu number
    fn from_menu_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

/// Read operations over the roster
pub trait RosterSearch {
    /// All records in the configured listing order
    fn list_students(&self) -> Vec<&Student>;

    /// Find a record by identifier
    fn find_student(&self, id: &str) -> Option<&Student>;

    /// Records whose column value contains the query keyword
    fn search_students(&self, query: &SearchQuery) -> Vec<&Student>;

    /// Records whose name equals `name`, ignoring case
    fn find_by_name(&self, name: &str) -> Vec<&Student>;

    /// Records whose field equals the criterion value
    fn find_matching(&self, criterion: &DeleteCriterion) -> Vec<&Student>;

    /// Whether a record with this identifier exists
    fn contains_id(&self, id: &str) -> bool {
        self.find_student(id).is_some()
    }

    /// Summary statistics for the roster
    fn stats(&self) -> RosterStats;
}

/// Mutating operations over the roster
///
/// Combined with [`RosterSearch`] for complete Create, Read, Update, Delete
/// functionality.
pub trait RosterCrud: RosterSearch {
    /// Add a new record, rejecting duplicate identifiers
    fn add_student(&mut self, student: Student) -> AppResult<()>;

    /// Replace one field of an existing record
    fn update_student(&mut self, id: &str, value: FieldValue) -> AppResult<&Student>;

    /// Remove a record by identifier
    fn delete_student(&mut self, id: &str) -> AppResult<Student>;

    /// Remove every record whose identifier is listed
    fn delete_students(&mut self, ids: &[String]) -> Vec<Student>;
}
