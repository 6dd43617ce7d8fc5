//! Core operations implementation
//!
//! This module provides the main implementation of the core traits, serving
//! as the central hub for roster operations during a session.

use crate::config::{Config, SortBy};
use crate::core::data::{
    DeleteCriterion, FieldValue, Roster, RosterStats, SearchQuery, Student,
};
use crate::core::seed::sample_roster;
use crate::core::traits::{RosterCrud, RosterSearch};
use crate::utils::error::AppResult;

/// Owns the in-memory roster for the lifetime of the process
pub struct RosterOperations {
    roster: Roster,
    sort_by: SortBy,
}

impl RosterOperations {
    pub fn new(roster: Roster, config: &Config) -> Self {
        Self {
            roster,
            sort_by: config.general.sort_by,
        }
    }

    /// Start a session, seeding the sample records when enabled
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let roster = if config.general.seed_sample_data {
            sample_roster()?
        } else {
            Roster::new()
        };
        tracing::debug!(records = roster.len(), "roster initialised");
        Ok(Self::new(roster, config))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl RosterSearch for RosterOperations {
    fn list_students(&self) -> Vec<&Student> {
        self.roster.sorted(&self.sort_by)
    }

    fn find_student(&self, id: &str) -> Option<&Student> {
        self.roster.get(id)
    }

    fn search_students(&self, query: &SearchQuery) -> Vec<&Student> {
        let found = self.roster.search(query);
        tracing::debug!(column = ?query.column, keyword = query.keyword(), hits = found.len(), "search");
        found
    }

    fn find_by_name(&self, name: &str) -> Vec<&Student> {
        self.roster.find_by_name(name)
    }

    fn find_matching(&self, criterion: &DeleteCriterion) -> Vec<&Student> {
        self.roster.matching(criterion)
    }

    fn stats(&self) -> RosterStats {
        self.roster.stats()
    }
}

impl RosterCrud for RosterOperations {
    fn add_student(&mut self, student: Student) -> AppResult<()> {
        let id = student.id.clone();
        self.roster.insert(student)?;
        tracing::info!(%id, total = self.roster.len(), "student added");
        Ok(())
    }

    fn update_student(&mut self, id: &str, value: FieldValue) -> AppResult<&Student> {
        let field = value.field();
        let updated = self.roster.update(id, value)?;
        tracing::info!(%id, field = %field, "student updated");
        Ok(updated)
    }

    fn delete_student(&mut self, id: &str) -> AppResult<Student> {
        let removed = self.roster.remove(id)?;
        tracing::info!(%id, total = self.roster.len(), "student deleted");
        Ok(removed)
    }

    fn delete_students(&mut self, ids: &[String]) -> Vec<Student> {
        let removed = self.roster.remove_many(ids);
        tracing::info!(removed = removed.len(), total = self.roster.len(), "students deleted");
        removed
    }
}
