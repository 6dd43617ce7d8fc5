// Read operations: the report menu and the non-interactive list/stats commands

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::cli::{ListArgs, ListFormat};
use crate::config::Config;
use crate::core::data::{Gender, LearningMethod, Program, Schedule, SearchColumn, SearchQuery, Student};
use crate::core::operations::RosterOperations;
use crate::core::traits::RosterSearch;
use crate::utils::error::{AppResult, FlowResult};
use crate::utils::interactive::Console;
use crate::utils::output::{OutputStyle, format_student_line, render_students};
use crate::utils::stats::StatsCalculator;
use crate::utils::validate::validate_enrollment_year;

const REPORT_MENU: [&str; 3] = [
    "Report all records",
    "Report specific records",
    "Back to main menu",
];

pub fn report_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &impl RosterSearch,
) -> AppResult<()> {
    loop {
        console.show_menu("Student Report Menu", &REPORT_MENU)?;
        let choice = console.prompt_input("Select a report option [1-3]: ")?;

        match choice.as_str() {
            "1" => console.say(render_students(&ops.list_students()))?,
            "2" => report_specific(console, ops)?,
            "3" => {
                console.say(">> Returning to main menu...\n")?;
                return Ok(());
            }
            _ => console.warn("Invalid input! Please enter a number from 1 to 3.\n")?,
        }
    }
}

fn report_specific<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ops: &impl RosterSearch,
) -> AppResult<()> {
    console.show_options::<SearchColumn>("Search By")?;
    let Some(column) = console.read_choice::<SearchColumn>("\nSelect search column [1-7]: ")? else {
        return console.warn("Invalid column choice!\n");
    };

    let keyword = read_keyword(console, column)?;
    let query = SearchQuery::new(column, &keyword);
    console.say(render_students(&ops.search_students(&query)))
}

/// Ask for the keyword of a column search
///
/// Option columns are picked from their list, the year is validated, and
/// free-text columns accept anything.
fn read_keyword<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    column: SearchColumn,
) -> AppResult<String> {
    let keyword = match column {
        SearchColumn::Id | SearchColumn::Name => {
            console.prompt_input("Enter search keyword: ")?
        }
        SearchColumn::Gender => console.select_option::<Gender>("Choose Gender")?.to_string(),
        SearchColumn::Program => console.select_option::<Program>("Program Options")?.to_string(),
        SearchColumn::EnrollmentYear => console.prompt_valid(
            "Enter enrollment year (4 digits): ",
            |raw| validate_enrollment_year(raw).map(|_| raw.trim().to_string()),
        )?,
        SearchColumn::LearningMethod => {
            console.select_option::<LearningMethod>("Choose Learning Method")?.to_string()
        }
        SearchColumn::Schedule => console.select_option::<Schedule>("Choose Schedule")?.to_string(),
    };
    Ok(keyword)
}

pub fn handle_list_command(config: &Config, args: &ListArgs) -> Result<()> {
    let ops = RosterOperations::from_config(config).context("Failed to initialise the roster")?;
    let students = select_students(&ops, args);

    let format = args.format.unwrap_or(config.general.format);
    let mut stdout = io::stdout().lock();
    write_list(&mut stdout, &students, format)
}

/// Records named by the `list` filters, every record when no column is given
fn select_students<'a>(ops: &'a impl RosterSearch, args: &ListArgs) -> Vec<&'a Student> {
    match args.column {
        Some(column) => {
            let query = SearchQuery::new(column, args.keyword.as_deref().unwrap_or(""));
            ops.search_students(&query)
        }
        None => ops.list_students(),
    }
}

fn write_list(out: &mut impl Write, students: &[&Student], format: ListFormat) -> Result<()> {
    match format {
        ListFormat::Table => writeln!(out, "{}", render_students(students))?,
        ListFormat::Simple => {
            if students.is_empty() {
                let flow = FlowResult::EmptyList {
                    item_type: "students".to_string(),
                };
                writeln!(out, "{}", flow.render())?;
            } else {
                writeln!(
                    out,
                    "🎓 {} ({} found)",
                    OutputStyle::header("Students"),
                    OutputStyle::info(&students.len().to_string())
                )?;
                writeln!(out, "{}", OutputStyle::separator())?;
                for student in students {
                    writeln!(out, "{}", format_student_line(student))?;
                }
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(students)
                .context("Failed to serialize students to JSON")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

pub fn handle_stats_command(config: &Config) -> Result<()> {
    let ops = RosterOperations::from_config(config).context("Failed to initialise the roster")?;
    println!("{}", StatsCalculator::render(&ops.stats()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::interactive::tests::{scripted, transcript};

    fn seeded() -> RosterOperations {
        RosterOperations::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_report_all() {
        let ops = seeded();
        let mut console = scripted(&["1", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("Student Records"));
        for name in ["Andi Wijaya", "Gita Bandung", "Joko Widodo"] {
            assert!(out.contains(name), "missing {}", name);
        }
        assert!(out.contains(">> Returning to main menu..."));
    }

    #[test]
    fn test_report_by_name_keyword() {
        let ops = seeded();
        let mut console = scripted(&["2", "2", "WIJ aya", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("Andi Wijaya"));
        assert!(out.contains("Indah Wijaya"));
        assert!(!out.contains("Budi Sutresno"));
    }

    #[test]
    fn test_report_by_program_option() {
        let ops = seeded();
        // Program 4 is Digital Marketing
        let mut console = scripted(&["2", "4", "4", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("Dewi Pertiwi"));
        assert!(out.contains("Indah Wijaya"));
        assert!(!out.contains("Andi Wijaya"));
    }

    fn report_rows(out: &str) -> usize {
        out.matches("│ MH0").count()
    }

    #[test]
    fn test_report_by_gender_option() {
        let ops = seeded();
        // Column 3 is Gender, option 1 is Male
        let mut console = scripted(&["2", "3", "1", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert_eq!(report_rows(&out), 6);
        for name in ["Andi Wijaya", "Budi Sutresno", "Eka Gunting", "Fajar Baru", "Hari Pustaka", "Joko Widodo"] {
            assert!(out.contains(name), "missing {}", name);
        }
        for name in ["Citra Hati", "Dewi Pertiwi", "Gita Bandung", "Indah Wijaya"] {
            assert!(!out.contains(name), "unexpected {}", name);
        }
    }

    #[test]
    fn test_report_by_learning_method_option() {
        let ops = seeded();
        // Column 6 is Learning Method, option 2 is On Campus
        let mut console = scripted(&["2", "6", "2", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert_eq!(report_rows(&out), 5);
        assert!(out.contains("Budi Sutresno"));
        assert!(!out.contains("Andi Wijaya"));
    }

    #[test]
    fn test_report_by_schedule_option() {
        let ops = seeded();
        // Column 7 is Schedule, option 2 is After Hours
        let mut console = scripted(&["2", "7", "2", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert_eq!(report_rows(&out), 5);
        assert!(out.contains("Citra Hati"));
        assert!(!out.contains("Joko Widodo"));
    }

    #[test]
    fn test_list_filtered_by_gender() {
        let ops = seeded();
        let args = ListArgs {
            column: Some(SearchColumn::Gender),
            keyword: Some("male".to_string()),
            format: Some(ListFormat::Json),
        };
        let students = select_students(&ops, &args);
        assert_eq!(students.len(), 6);

        let mut out = Vec::new();
        write_list(&mut out, &students, ListFormat::Json).unwrap();
        let parsed: Vec<Student> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.iter().all(|s| s.gender == Gender::Male));

        let args = ListArgs {
            column: None,
            keyword: None,
            format: None,
        };
        assert_eq!(select_students(&ops, &args).len(), 10);
    }

    #[test]
    fn test_report_by_year_revalidates() {
        let ops = seeded();
        let mut console = scripted(&["2", "5", "20", "2025", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("Enrollment year must be a 4-digit number!"));
        assert!(out.contains("Gita Bandung"));
        assert!(!out.contains("Eka Gunting"));
    }

    #[test]
    fn test_report_without_matches() {
        let ops = seeded();
        let mut console = scripted(&["2", "1", "zz99", "3"]);
        report_menu(&mut console, &ops).unwrap();
        assert!(transcript(console).contains("No data found matching the search criteria!"));
    }

    #[test]
    fn test_invalid_column_returns_to_sub_menu() {
        let ops = seeded();
        let mut console = scripted(&["2", "8", "3"]);
        report_menu(&mut console, &ops).unwrap();

        let out = transcript(console);
        assert!(out.contains("Invalid column choice!"));
        assert_eq!(out.matches("===== Student Report Menu =====").count(), 2);
    }

    #[test]
    fn test_write_list_json() {
        let ops = seeded();
        let query = SearchQuery::new(SearchColumn::Schedule, "after hours");
        let students = ops.search_students(&query);

        let mut out = Vec::new();
        write_list(&mut out, &students, ListFormat::Json).unwrap();

        let parsed: Vec<Student> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 5);
        assert!(parsed.iter().all(|s| s.schedule == Schedule::AfterHours));
    }

    #[test]
    fn test_write_list_simple() {
        let ops = seeded();
        let mut out = Vec::new();
        write_list(&mut out, &ops.list_students(), ListFormat::Simple).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.contains("modules: ")).count(), 10);

        let mut out = Vec::new();
        write_list(&mut out, &[], ListFormat::Simple).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No students found"));
    }
}
