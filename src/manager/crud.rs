// Write operations: the add, update and delete menus

use std::io::{BufRead, Write};

use crate::core::data::{
    CriterionKind, DeleteCriterion, EditableField, FieldValue, Gender, LearningMethod,
    MODULE_COUNT, Program, Schedule, Student,
};
use crate::core::traits::{RosterCrud, RosterSearch};
use crate::utils::error::{AppResult, FlowResult};
use crate::utils::interactive::Console;
use crate::utils::output::render_students;
use crate::utils::validate::{
    normalize_id, validate_enrollment_year, validate_name, validate_new_id, validate_score,
};

const ADD_MENU: [&str; 2] = ["Add a student", "Back to main menu"];
const UPDATE_MENU: [&str; 2] = ["Update a student", "Back to main menu"];
const DELETE_MENU: [&str; 4] = [
    "Delete by ID",
    "Delete by name",
    "Delete by criterion",
    "Back to main menu",
];

fn cancelled(msg: &str) -> FlowResult {
    FlowResult::Cancelled(format!("{}\n", msg))
}

fn student_not_found(id: &str) -> FlowResult {
    FlowResult::NotFound {
        item_type: "Student with ID".to_string(),
        search_term: id.to_string(),
    }
}

pub fn add_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    loop {
        console.show_menu("Add Student Menu", &ADD_MENU)?;
        match console.prompt_input("Select an option [1-2]: ")?.as_str() {
            "1" => add_student(console, ops)?,
            "2" => {
                console.say(">> Returning to main menu...\n")?;
                return Ok(());
            }
            _ => console.warn("Invalid input! Please enter a number from 1 to 2.\n")?,
        }
    }
}

fn add_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    let student = collect_student(console, &*ops)?;
    console.say(render_students(&[&student]))?;

    if !console.prompt_yes_no("\nConfirm adding this record?")? {
        return console.report(cancelled("Adding cancelled."));
    }

    let id = student.id.clone();
    ops.add_student(student)?;
    console.report(FlowResult::Success(format!(
        "Student with ID {} added successfully.\n",
        id
    )))
}

/// Ask for every field of a new record, re-prompting until each is valid
fn collect_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &impl RosterSearch,
) -> AppResult<Student> {
    let id = console.prompt_valid("Enter student ID (unique): ", |raw| {
        validate_new_id(raw, |id| ops.contains_id(id))
    })?;
    let name = console.prompt_valid("Enter student name: ", validate_name)?;
    let gender = console.select_option::<Gender>("Choose Gender")?;
    let program = console.select_option::<Program>("Program Options")?;
    let enrollment_year = console.prompt_valid(
        "Enter enrollment year (4 digits, e.g. 2023): ",
        validate_enrollment_year,
    )?;
    let learning_method = console.select_option::<LearningMethod>("Choose Learning Method")?;
    let schedule = console.select_option::<Schedule>("Choose Schedule")?;

    let mut module_scores = [0u8; MODULE_COUNT];
    for (i, score) in module_scores.iter_mut().enumerate() {
        *score = console.prompt_valid(
            &format!("Enter Module {} score (0-100): ", i + 1),
            validate_score,
        )?;
    }

    Ok(Student {
        id,
        name,
        gender,
        program,
        enrollment_year,
        learning_method,
        schedule,
        module_scores,
    })
}

pub fn update_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    loop {
        console.show_menu("Update Student Menu", &UPDATE_MENU)?;
        match console.prompt_input("Select an option [1-2]: ")?.as_str() {
            "1" => update_student(console, ops)?,
            "2" => {
                console.say(">> Returning to main menu...\n")?;
                return Ok(());
            }
            _ => console.warn("Invalid input! Please enter a number from 1 to 2.\n")?,
        }
    }
}

fn update_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    let id = normalize_id(&console.prompt_input("Enter the ID of the student to update: ")?);
    let Some(current) = ops.find_student(&id).cloned() else {
        return console.report(student_not_found(&id));
    };
    console.say(render_students(&[&current]))?;

    if !console.prompt_yes_no("\nContinue updating?")? {
        return console.report(cancelled("Update cancelled."));
    }

    console.show_options::<EditableField>("Column Options")?;
    let Some(field) = console.read_choice::<EditableField>("Enter column number: ")? else {
        return console.warn("Invalid choice!\n");
    };

    console.say(format!(
        "\nUpdating {} (currently '{}')...",
        field,
        current.field_value(field)
    ))?;
    let value = read_field_value(console, field)?;

    let prompt = format!("Confirm changing {} to '{}'?", field, value);
    if !console.prompt_yes_no(&prompt)? {
        return console.report(cancelled("Change cancelled."));
    }

    let updated = ops.update_student(&id, value)?;
    let table = render_students(&[updated]);
    console.report(FlowResult::Success(format!(
        "{} for ID {} updated successfully.",
        field, id
    )))?;
    console.say(table)
}

/// Collect a validated replacement value for `field`
fn read_field_value<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    field: EditableField,
) -> AppResult<FieldValue> {
    let value = match field {
        EditableField::Name => FieldValue::Name(console.prompt_valid("Enter new name: ", validate_name)?),
        EditableField::Gender => FieldValue::Gender(console.select_option("Choose Gender")?),
        EditableField::Program => FieldValue::Program(console.select_option("Program Options")?),
        EditableField::EnrollmentYear => FieldValue::EnrollmentYear(console.prompt_valid(
            "Enter enrollment year (4 digits, e.g. 2023): ",
            validate_enrollment_year,
        )?),
        EditableField::LearningMethod => {
            FieldValue::LearningMethod(console.select_option("Choose Learning Method")?)
        }
        EditableField::Schedule => FieldValue::Schedule(console.select_option("Choose Schedule")?),
        EditableField::Module(module) => {
            let score = console.prompt_valid(
                &format!("Enter new {} score (0-100): ", field),
                validate_score,
            )?;
            FieldValue::ModuleScore(module, score)
        }
    };
    Ok(value)
}

pub fn delete_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    loop {
        console.show_menu("Delete Student Menu", &DELETE_MENU)?;
        match console.prompt_input("Select an option [1-4]: ")?.as_str() {
            "1" => delete_by_id(console, ops)?,
            "2" => delete_by_name(console, ops)?,
            "3" => delete_by_criterion(console, ops)?,
            "4" => {
                console.say(">> Returning to main menu...\n")?;
                return Ok(());
            }
            _ => console.warn("Invalid input! Please enter a number from 1 to 4.\n")?,
        }
    }
}

fn delete_by_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    let id = normalize_id(&console.prompt_input("Enter student ID: ")?);
    let Some(student) = ops.find_student(&id) else {
        return console.report(student_not_found(&id));
    };
    console.say(render_students(&[student]))?;

    confirm_delete(console, ops, &id)
}

fn delete_by_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    let name = console.prompt_input("Enter student name: ")?;
    let matches = ops.find_by_name(&name);
    if matches.is_empty() {
        return console.report(FlowResult::NotFound {
            item_type: "Student named".to_string(),
            search_term: format!("'{}'", name),
        });
    }
    console.say(render_students(&matches))?;

    let ids: Vec<String> = matches.iter().map(|s| s.id.clone()).collect();
    let id = match ids.as_slice() {
        [only] => only.clone(),
        _ => {
            let id = normalize_id(
                &console.prompt_input("\nEnter the ID of the student to delete: ")?,
            );
            if !ids.contains(&id) {
                return console.warn("ID is not in the list of matching students!\n");
            }
            id
        }
    };

    confirm_delete(console, ops, &id)
}

fn confirm_delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
    id: &str,
) -> AppResult<()> {
    if !console.prompt_yes_no("\nConfirm deleting this record?")? {
        return console.report(cancelled("Deletion cancelled."));
    }

    ops.delete_student(id)?;
    console.report(FlowResult::Success(format!(
        "Student with ID {} deleted successfully.\n",
        id
    )))
}

fn delete_by_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    console.show_options::<CriterionKind>("Deletion Criteria")?;
    let Some(kind) = console.read_choice::<CriterionKind>("\nEnter criterion number: ")? else {
        return console.warn("Invalid choice! Please enter a number from 1 to 5.\n");
    };

    let criterion = read_criterion(console, kind)?;
    let ids: Vec<String> = {
        let matches = ops.find_matching(&criterion);
        if matches.is_empty() {
            return console.warn(&format!("\nNo records found with {}!\n", criterion));
        }
        console.say(format!("\nFound {} records with {}:", matches.len(), criterion))?;
        console.say(render_students(&matches))?;
        matches.iter().map(|s| s.id.clone()).collect()
    };

    if !console.prompt_yes_no("\nConfirm deleting all records above?")? {
        return console.report(cancelled("Deletion cancelled."));
    }

    let removed = ops.delete_students(&ids);
    console.report(FlowResult::Success(format!(
        "{} records deleted.\n",
        removed.len()
    )))
}

fn read_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: CriterionKind,
) -> AppResult<DeleteCriterion> {
    let criterion = match kind {
        CriterionKind::Gender => DeleteCriterion::Gender(console.select_option("Choose Gender")?),
        CriterionKind::Program => {
            DeleteCriterion::Program(console.select_option("Program Options")?)
        }
        CriterionKind::EnrollmentYear => DeleteCriterion::EnrollmentYear(console.prompt_valid(
            "Enter enrollment year (4 digits): ",
            validate_enrollment_year,
        )?),
        CriterionKind::LearningMethod => {
            DeleteCriterion::LearningMethod(console.select_option("Choose Learning Method")?)
        }
        CriterionKind::Schedule => {
            DeleteCriterion::Schedule(console.select_option("Choose Schedule")?)
        }
    };
    Ok(criterion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::operations::RosterOperations;
    use crate::utils::interactive::tests::{scripted, transcript};

    fn seeded() -> RosterOperations {
        RosterOperations::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_add_student_with_retries() {
        let mut ops = seeded();
        let mut console = scripted(&[
            "1",
            "mh001", "  mh011 ",
            "R2D2", "Kartika Sari",
            "2", "3",
            "23", "2023",
            "1", "2",
            "85", "101", "90", "88",
            "y",
            "2",
        ]);
        add_menu(&mut console, &mut ops).unwrap();

        let added = ops.find_student("MH011").unwrap();
        assert_eq!(added.name, "Kartika Sari");
        assert_eq!(added.gender, Gender::Female);
        assert_eq!(added.program, Program::ProductManagement);
        assert_eq!(added.enrollment_year, 2023);
        assert_eq!(added.learning_method, LearningMethod::Online);
        assert_eq!(added.schedule, Schedule::AfterHours);
        assert_eq!(added.module_scores, [85, 90, 88]);

        let out = transcript(console);
        assert!(out.contains("Student with ID MH001 already exists!"));
        assert!(out.contains("Module score must be a number between 0 and 100!"));
        assert!(out.contains("Student with ID MH011 added successfully."));
    }

    #[test]
    fn test_add_cancelled() {
        let mut ops = seeded();
        let mut console = scripted(&[
            "1", "MH020", "Lina", "2", "1", "2022", "2", "1", "70", "70", "70", "n", "2",
        ]);
        add_menu(&mut console, &mut ops).unwrap();

        assert!(!ops.contains_id("MH020"));
        assert_eq!(ops.list_students().len(), 10);
        assert!(transcript(console).contains("Adding cancelled."));
    }

    #[test]
    fn test_update_name() {
        let mut ops = seeded();
        let mut console = scripted(&["1", "mh003", "y", "1", "Citra Kirana", "y", "2"]);
        update_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.find_student("MH003").unwrap().name, "Citra Kirana");
        let out = transcript(console);
        assert!(out.contains("Confirm changing Name to 'Citra Kirana'?"));
        assert!(out.contains("Name for ID MH003 updated successfully."));
    }

    #[test]
    fn test_update_module_score() {
        let mut ops = seeded();
        let mut console = scripted(&["1", "MH002", "y", "8", "abc", "95", "y", "2"]);
        update_menu(&mut console, &mut ops).unwrap();
        assert_eq!(ops.find_student("MH002").unwrap().module_scores[1], 95);
    }

    #[test]
    fn test_update_unknown_or_declined() {
        let mut ops = seeded();
        let before = ops.find_student("MH004").unwrap().clone();
        let mut console = scripted(&[
            "1", "MH099",
            "1", "MH004", "n",
            "1", "MH004", "y", "10",
            "1", "MH004", "y", "4", "2019", "n",
            "2",
        ]);
        update_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.find_student("MH004").unwrap(), &before);
        let out = transcript(console);
        assert!(out.contains("Student with ID MH099 not found!"));
        assert!(out.contains("Update cancelled."));
        assert!(out.contains("Invalid choice!"));
        assert!(out.contains("Change cancelled."));
    }

    #[test]
    fn test_delete_by_id() {
        let mut ops = seeded();
        let mut console = scripted(&["1", "mh005", "n", "1", "mh005", "y", "1", "MH005", "4"]);
        delete_menu(&mut console, &mut ops).unwrap();

        assert!(!ops.contains_id("MH005"));
        let out = transcript(console);
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Student with ID MH005 deleted successfully."));
        assert!(out.contains("Student with ID MH005 not found!"));
    }

    #[test]
    fn test_delete_by_name_single_match() {
        let mut ops = seeded();
        let mut console = scripted(&["2", "  citra HATI ", "y", "4"]);
        delete_menu(&mut console, &mut ops).unwrap();
        assert!(!ops.contains_id("MH003"));
    }

    #[test]
    fn test_delete_by_name_several_matches() {
        let mut ops = seeded();
        ops.add_student(Student {
            id: "MH011".to_string(),
            ..ops.find_student("MH001").unwrap().clone()
        })
        .unwrap();

        let mut console = scripted(&[
            "2", "andi wijaya", "MH005",
            "2", "andi wijaya", "mh011", "y",
            "4",
        ]);
        delete_menu(&mut console, &mut ops).unwrap();

        assert!(ops.contains_id("MH001"));
        assert!(ops.contains_id("MH005"));
        assert!(!ops.contains_id("MH011"));
        assert!(transcript(console).contains("ID is not in the list of matching students!"));
    }

    #[test]
    fn test_delete_by_name_not_found() {
        let mut ops = seeded();
        let mut console = scripted(&["2", "Andi", "4"]);
        delete_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.list_students().len(), 10);
        assert!(transcript(console).contains("Student named 'Andi' not found!"));
    }

    #[test]
    fn test_delete_by_criterion() {
        let mut ops = seeded();
        // Criterion 2 is Program, option 2 is Business & Data Analyst
        let mut console = scripted(&["3", "2", "2", "y", "4"]);
        delete_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.list_students().len(), 8);
        assert!(!ops.contains_id("MH002"));
        assert!(!ops.contains_id("MH010"));
        let out = transcript(console);
        assert!(out.contains("Found 2 records with Program = 'Business & Data Analyst':"));
        assert!(out.contains("2 records deleted."));
    }

    #[test]
    fn test_delete_by_criterion_without_matches() {
        let mut ops = seeded();
        let mut console = scripted(&["3", "6", "3", "3", "1999", "3", "4", "2", "n", "4"]);
        delete_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.list_students().len(), 10);
        let out = transcript(console);
        assert!(out.contains("Invalid choice! Please enter a number from 1 to 5."));
        assert!(out.contains("No records found with Enrollment Year = '1999'!"));
        assert!(out.contains("Deletion cancelled."));
    }
}
