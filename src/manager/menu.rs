use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::core::operations::RosterOperations;
use crate::core::traits::RosterCrud;
use crate::manager::{crud, query};
use crate::utils::error::{AppError, AppResult};
use crate::utils::interactive::Console;
use crate::utils::output::OutputStyle;

const MAIN_MENU: [&str; 5] = [
    "Report Student Data",
    "Add Student Data",
    "Update Student Data",
    "Delete Student Data",
    "Exit",
];

/// Run the menu on the terminal with a freshly seeded roster
pub fn run_interactive(config: &Config) -> Result<()> {
    let mut ops = RosterOperations::from_config(config)
        .context("Failed to initialise the roster")?;
    let mut console = Console::stdio();
    run_main_menu(&mut console, &mut ops)?;
    Ok(())
}

/// Main menu loop; returns when the user exits or input ends
pub fn run_main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    match main_loop(console, ops) {
        Err(AppError::InputClosed) => {
            tracing::debug!("input closed, leaving main menu");
            console.say(OutputStyle::muted("\nInput closed, exiting."))
        }
        other => other,
    }
}

fn main_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &mut impl RosterCrud,
) -> AppResult<()> {
    loop {
        console.show_menu("Student Record Menu", &MAIN_MENU)?;
        let choice = console.prompt_input("Select a main menu option [1-5]: ")?;

        match choice.as_str() {
            "1" => query::report_menu(console, &*ops)?,
            "2" => crud::add_menu(console, ops)?,
            "3" => crud::update_menu(console, ops)?,
            "4" => crud::delete_menu(console, ops)?,
            "5" => {
                console.say(">> Exiting program. Thank you!")?;
                return Ok(());
            }
            _ => console.warn("Invalid input! Please enter a number from 1 to 5.\n")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::traits::RosterSearch;
    use crate::utils::interactive::tests::{scripted, transcript};

    fn seeded() -> RosterOperations {
        RosterOperations::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_exit_from_main_menu() {
        let mut ops = seeded();
        let mut console = scripted(&["5"]);
        run_main_menu(&mut console, &mut ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("===== Student Record Menu ====="));
        assert!(out.contains(">> Exiting program. Thank you!"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut ops = seeded();
        let mut console = scripted(&["9", "abc", "5"]);
        run_main_menu(&mut console, &mut ops).unwrap();

        let out = transcript(console);
        assert_eq!(out.matches("Invalid input! Please enter a number from 1 to 5.").count(), 2);
        assert_eq!(out.matches("===== Student Record Menu =====").count(), 3);
    }

    #[test]
    fn test_closed_input_exits_cleanly() {
        let mut ops = seeded();
        let mut console = scripted(&["1", "2"]);
        run_main_menu(&mut console, &mut ops).unwrap();
        assert!(transcript(console).contains("Input closed, exiting."));
    }

    #[test]
    fn test_full_session() {
        let mut ops = seeded();
        let mut console = scripted(&[
            // delete MH010
            "4", "1", "mh010", "y", "4",
            // report everything
            "1", "1", "3",
            "5",
        ]);
        run_main_menu(&mut console, &mut ops).unwrap();

        assert_eq!(ops.list_students().len(), 9);
        let out = transcript(console);
        assert!(out.contains("Student with ID MH010 deleted successfully."));
        assert!(out.contains("Budi Sutresno"));
    }
}
