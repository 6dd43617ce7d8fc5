//! Core data structures for roster management
//!
//! This module contains the student record, the option types used by its
//! fields, and the ordered collection that holds the records in memory.

use crate::config::SortBy;
use crate::core::traits::Choice;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validate::validate_name;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Male")]
    Male,
    #[serde(rename = "Female")]
    Female,
}

impl Choice for Gender {
    fn all() -> &'static [Self] {
        &[Gender::Male, Gender::Female]
    }

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "Data Science & Machine Learning")]
    DataScience,
    #[serde(rename = "Business & Data Analyst")]
    BusinessAnalyst,
    #[serde(rename = "Product Management")]
    ProductManagement,
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "Fullstack Web Development")]
    FullstackWeb,
    #[serde(rename = "Visual & UI/UX Design")]
    VisualDesign,
    #[serde(rename = "3D & Animation")]
    Animation,
    #[serde(rename = "UI/UX & Front End Development")]
    FrontEnd,
}

impl Choice for Program {
    fn all() -> &'static [Self] {
        &[
            Program::DataScience,
            Program::BusinessAnalyst,
            Program::ProductManagement,
            Program::DigitalMarketing,
            Program::FullstackWeb,
            Program::VisualDesign,
            Program::Animation,
            Program::FrontEnd,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Program::DataScience => "Data Science & Machine Learning",
            Program::BusinessAnalyst => "Business & Data Analyst",
            Program::ProductManagement => "Product Management",
            Program::DigitalMarketing => "Digital Marketing",
            Program::FullstackWeb => "Fullstack Web Development",
            Program::VisualDesign => "Visual & UI/UX Design",
            Program::Animation => "3D & Animation",
            Program::FrontEnd => "UI/UX & Front End Development",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningMethod {
    #[serde(rename = "Online")]
    Online,
    #[serde(rename = "On Campus")]
    OnCampus,
}

impl Choice for LearningMethod {
    fn all() -> &'static [Self] {
        &[LearningMethod::Online, LearningMethod::OnCampus]
    }

    fn label(&self) -> &'static str {
        match self {
            LearningMethod::Online => "Online",
            LearningMethod::OnCampus => "On Campus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "Office Hours")]
    OfficeHours,
    #[serde(rename = "After Hours")]
    AfterHours,
}

impl Choice for Schedule {
    fn all() -> &'static [Self] {
        &[Schedule::OfficeHours, Schedule::AfterHours]
    }

    fn label(&self) -> &'static str {
        match self {
            Schedule::OfficeHours => "Office Hours",
            Schedule::AfterHours => "After Hours",
        }
    }
}

/// Number of graded modules per student
pub const MODULE_COUNT: usize = 3;

/// Highest score a module can receive
pub const MAX_SCORE: u8 = 100;

/// Largest year that still fits in four digits
pub const MAX_ENROLLMENT_YEAR: u16 = 9999;

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub program: Program,
    pub enrollment_year: u16,
    pub learning_method: LearningMethod,
    pub schedule: Schedule,
    pub module_scores: [u8; MODULE_COUNT],
}

impl Student {
    /// The value of a report column as displayed in tables
    pub fn column_value(&self, column: SearchColumn) -> String {
        match column {
            SearchColumn::Id => self.id.clone(),
            SearchColumn::Name => self.name.clone(),
            SearchColumn::Gender => self.gender.to_string(),
            SearchColumn::Program => self.program.to_string(),
            SearchColumn::EnrollmentYear => self.enrollment_year.to_string(),
            SearchColumn::LearningMethod => self.learning_method.to_string(),
            SearchColumn::Schedule => self.schedule.to_string(),
        }
    }

    /// The current value of an editable field
    pub fn field_value(&self, field: EditableField) -> FieldValue {
        match field {
            EditableField::Name => FieldValue::Name(self.name.clone()),
            EditableField::Gender => FieldValue::Gender(self.gender),
            EditableField::Program => FieldValue::Program(self.program),
            EditableField::EnrollmentYear => FieldValue::EnrollmentYear(self.enrollment_year),
            EditableField::LearningMethod => FieldValue::LearningMethod(self.learning_method),
            EditableField::Schedule => FieldValue::Schedule(self.schedule),
            EditableField::Module(module) => {
                FieldValue::ModuleScore(module, self.module_scores[module.index()])
            }
        }
    }

    /// Replace one field with a new value
    ///
    /// Values are checked with the same rules as interactive input, and the
    /// record is left untouched when one is rejected.
    pub fn apply(&mut self, value: FieldValue) -> AppResult<()> {
        match value {
            FieldValue::Name(name) => self.name = validate_name(&name)?,
            FieldValue::Gender(gender) => self.gender = gender,
            FieldValue::Program(program) => self.program = program,
            FieldValue::EnrollmentYear(year) => {
                if year > MAX_ENROLLMENT_YEAR {
                    return Err(AppError::InvalidInput(
                        "Enrollment year must be a 4-digit number".to_string(),
                    ));
                }
                self.enrollment_year = year;
            }
            FieldValue::LearningMethod(method) => self.learning_method = method,
            FieldValue::Schedule(schedule) => self.schedule = schedule,
            FieldValue::ModuleScore(module, score) => {
                if score > MAX_SCORE {
                    return Err(AppError::InvalidInput(format!(
                        "Module score must be between 0 and {}",
                        MAX_SCORE
                    )));
                }
                self.module_scores[module.index()] = score;
            }
        }
        Ok(())
    }

    pub fn average_score(&self) -> f64 {
        let total: u32 = self.module_scores.iter().map(|&s| u32::from(s)).sum();
        f64::from(total) / MODULE_COUNT as f64
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Columns available for report searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchColumn {
    Id,
    Name,
    Gender,
    Program,
    EnrollmentYear,
    LearningMethod,
    Schedule,
}

impl Choice for SearchColumn {
    fn all() -> &'static [Self] {
        &[
            SearchColumn::Id,
            SearchColumn::Name,
            SearchColumn::Gender,
            SearchColumn::Program,
            SearchColumn::EnrollmentYear,
            SearchColumn::LearningMethod,
            SearchColumn::Schedule,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            SearchColumn::Id => "ID",
            SearchColumn::Name => "Name",
            SearchColumn::Gender => "Gender",
            SearchColumn::Program => "Program",
            SearchColumn::EnrollmentYear => "Enrollment Year",
            SearchColumn::LearningMethod => "Learning Method",
            SearchColumn::Schedule => "Schedule",
        }
    }
}

impl SearchColumn {
    /// Columns whose values come from a fixed option list
    pub fn is_option(self) -> bool {
        matches!(
            self,
            SearchColumn::Gender
                | SearchColumn::Program
                | SearchColumn::LearningMethod
                | SearchColumn::Schedule
        )
    }
}

/// Search over one column
///
/// Both the keyword and the column value ignore whitespace and case, so
/// "oncampus" finds "On Campus". Option columns must equal the keyword, since
/// one option label can contain another ("Male" in "Female"); the other
/// columns match on a substring. An empty keyword matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub column: SearchColumn,
    keyword: String,
}

impl SearchQuery {
    pub fn new(column: SearchColumn, keyword: &str) -> Self {
        Self {
            column,
            keyword: normalize_search_text(keyword),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, student: &Student) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let value = normalize_search_text(&student.column_value(self.column));
        if self.column.is_option() {
            value == self.keyword
        } else {
            value.contains(&self.keyword)
        }
    }
}

fn normalize_search_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fields that can be changed after a record is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Name,
    Gender,
    Program,
    EnrollmentYear,
    LearningMethod,
    Schedule,
    Module(Module),
}

/// One of the scored modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    First,
    Second,
    Third,
}

impl Module {
    /// Position of the score in [`Student::module_scores`]
    pub fn index(self) -> usize {
        match self {
            Module::First => 0,
            Module::Second => 1,
            Module::Third => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Module::First => "Module 1",
            Module::Second => "Module 2",
            Module::Third => "Module 3",
        }
    }
}

impl Choice for EditableField {
    fn all() -> &'static [Self] {
        &[
            EditableField::Name,
            EditableField::Gender,
            EditableField::Program,
            EditableField::EnrollmentYear,
            EditableField::LearningMethod,
            EditableField::Schedule,
            EditableField::Module(Module::First),
            EditableField::Module(Module::Second),
            EditableField::Module(Module::Third),
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            EditableField::Name => "Name",
            EditableField::Gender => "Gender",
            EditableField::Program => "Program",
            EditableField::EnrollmentYear => "Enrollment Year",
            EditableField::LearningMethod => "Learning Method",
            EditableField::Schedule => "Schedule",
            EditableField::Module(module) => module.label(),
        }
    }
}

/// A typed replacement value for one [`EditableField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Name(String),
    Gender(Gender),
    Program(Program),
    EnrollmentYear(u16),
    LearningMethod(LearningMethod),
    Schedule(Schedule),
    ModuleScore(Module, u8),
}

impl FieldValue {
    pub fn field(&self) -> EditableField {
        match self {
            FieldValue::Name(_) => EditableField::Name,
            FieldValue::Gender(_) => EditableField::Gender,
            FieldValue::Program(_) => EditableField::Program,
            FieldValue::EnrollmentYear(_) => EditableField::EnrollmentYear,
            FieldValue::LearningMethod(_) => EditableField::LearningMethod,
            FieldValue::Schedule(_) => EditableField::Schedule,
            FieldValue::ModuleScore(module, _) => EditableField::Module(*module),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Name(name) => write!(f, "{}", name),
            FieldValue::Gender(gender) => write!(f, "{}", gender),
            FieldValue::Program(program) => write!(f, "{}", program),
            FieldValue::EnrollmentYear(year) => write!(f, "{}", year),
            FieldValue::LearningMethod(method) => write!(f, "{}", method),
            FieldValue::Schedule(schedule) => write!(f, "{}", schedule),
            FieldValue::ModuleScore(_, score) => write!(f, "{}", score),
        }
    }
}

/// Fields that can select records for bulk deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Gender,
    Program,
    EnrollmentYear,
    LearningMethod,
    Schedule,
}

impl Choice for CriterionKind {
    fn all() -> &'static [Self] {
        &[
            CriterionKind::Gender,
            CriterionKind::Program,
            CriterionKind::EnrollmentYear,
            CriterionKind::LearningMethod,
            CriterionKind::Schedule,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            CriterionKind::Gender => "Gender",
            CriterionKind::Program => "Program",
            CriterionKind::EnrollmentYear => "Enrollment Year",
            CriterionKind::LearningMethod => "Learning Method",
            CriterionKind::Schedule => "Schedule",
        }
    }
}

/// Field equality used to select records for bulk deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCriterion {
    Gender(Gender),
    Program(Program),
    EnrollmentYear(u16),
    LearningMethod(LearningMethod),
    Schedule(Schedule),
}

impl DeleteCriterion {
    pub fn kind(&self) -> CriterionKind {
        match self {
            DeleteCriterion::Gender(_) => CriterionKind::Gender,
            DeleteCriterion::Program(_) => CriterionKind::Program,
            DeleteCriterion::EnrollmentYear(_) => CriterionKind::EnrollmentYear,
            DeleteCriterion::LearningMethod(_) => CriterionKind::LearningMethod,
            DeleteCriterion::Schedule(_) => CriterionKind::Schedule,
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            DeleteCriterion::Gender(gender) => student.gender == *gender,
            DeleteCriterion::Program(program) => student.program == *program,
            DeleteCriterion::EnrollmentYear(year) => student.enrollment_year == *year,
            DeleteCriterion::LearningMethod(method) => student.learning_method == *method,
            DeleteCriterion::Schedule(schedule) => student.schedule == *schedule,
        }
    }

    fn value_label(&self) -> String {
        match self {
            DeleteCriterion::Gender(gender) => gender.to_string(),
            DeleteCriterion::Program(program) => program.to_string(),
            DeleteCriterion::EnrollmentYear(year) => year.to_string(),
            DeleteCriterion::LearningMethod(method) => method.to_string(),
            DeleteCriterion::Schedule(schedule) => schedule.to_string(),
        }
    }
}

impl fmt::Display for DeleteCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = '{}'", self.kind(), self.value_label())
    }
}

/// Statistics about the roster
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    pub total_students: usize,
    pub program_counts: Vec<(Program, usize)>,
    pub gender_counts: Vec<(Gender, usize)>,
    pub method_counts: Vec<(LearningMethod, usize)>,
    pub schedule_counts: Vec<(Schedule, usize)>,
    pub module_averages: Option<[f64; MODULE_COUNT]>,
    pub overall_average: Option<f64>,
}

/// Ordered, key-unique collection of student records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Build a roster from records, rejecting duplicate identifiers
    pub fn from_students(students: Vec<Student>) -> AppResult<Self> {
        let mut roster = Self::new();
        for student in students {
            roster.insert(student)?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.students.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Add a record at the end of the listing order
    pub fn insert(&mut self, student: Student) -> AppResult<()> {
        if self.contains(&student.id) {
            return Err(AppError::DuplicateId(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn update(&mut self, id: &str, value: FieldValue) -> AppResult<&Student> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        student.apply(value)?;
        Ok(student)
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Student> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        Ok(self.students.remove(index))
    }

    /// Remove every listed record; unknown identifiers are skipped
    pub fn remove_many(&mut self, ids: &[String]) -> Vec<Student> {
        let (removed, kept): (Vec<Student>, Vec<Student>) = std::mem::take(&mut self.students)
            .into_iter()
            .partition(|s| ids.contains(&s.id));
        self.students = kept;
        removed
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Student> {
        self.students.iter().filter(|s| query.matches(s)).collect()
    }

    /// Records whose name equals `name`, ignoring case and surrounding spaces
    pub fn find_by_name(&self, name: &str) -> Vec<&Student> {
        let wanted = name.trim().to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name.to_lowercase() == wanted)
            .collect()
    }

    pub fn matching(&self, criterion: &DeleteCriterion) -> Vec<&Student> {
        self.students.iter().filter(|s| criterion.matches(s)).collect()
    }

    /// Records in the requested listing order
    pub fn sorted(&self, sort_by: &SortBy) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.iter().collect();
        match sort_by {
            SortBy::Insertion => {}
            SortBy::Id => students.sort_by(|a, b| a.id.cmp(&b.id)),
            SortBy::Name => students.sort_by_key(|s| s.name.to_lowercase()),
            SortBy::Year => students.sort_by_key(|s| s.enrollment_year),
        }
        students
    }

    /// Calculate statistics for the roster
    pub fn stats(&self) -> RosterStats {
        let total_students = self.students.len();

        let (module_averages, overall_average) = if total_students == 0 {
            (None, None)
        } else {
            let mut sums = [0u32; MODULE_COUNT];
            for student in &self.students {
                for (sum, score) in sums.iter_mut().zip(student.module_scores) {
                    *sum += u32::from(score);
                }
            }
            let averages = sums.map(|sum| f64::from(sum) / total_students as f64);
            let overall = averages.iter().sum::<f64>() / MODULE_COUNT as f64;
            (Some(averages), Some(overall))
        };

        RosterStats {
            total_students,
            program_counts: count_by(&self.students, |s| s.program),
            gender_counts: count_by(&self.students, |s| s.gender),
            method_counts: count_by(&self.students, |s| s.learning_method),
            schedule_counts: count_by(&self.students, |s| s.schedule),
            module_averages,
            overall_average,
        }
    }
}

/// Count records per option, in menu order, skipping options nobody has
fn count_by<T: Choice>(students: &[Student], key: impl Fn(&Student) -> T) -> Vec<(T, usize)> {
    T::all()
        .iter()
        .map(|&option| (option, students.iter().filter(|s| key(s) == option).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}

macro_rules! display_as_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_as_label!(
    Gender,
    Program,
    LearningMethod,
    Schedule,
    SearchColumn,
    EditableField,
    CriterionKind,
);
