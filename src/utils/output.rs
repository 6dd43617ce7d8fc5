use colored::*;
use crossterm::tty::IsTty;
use crate::core::data::Student;
use crate::core::traits::Choice;

/// Column headers of the student table
pub const STUDENT_HEADERS: [&str; 10] = [
    "ID", "Name", "Gender", "Program", "Year", "Method", "Schedule", "Module 1", "Module 2",
    "Module 3",
];

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn id(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }
}

/// Turn colors on or off for the whole process
///
/// Colors stay off when stdout is not a terminal.
pub fn configure_color(enabled: bool) {
    let use_color = enabled && std::io::stdout().is_tty();
    colored::control::set_override(use_color);
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Center `text` in a field of `width` characters
pub fn center(text: &str, width: usize) -> String {
    let len = text_width(text);
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| text_width(cell))
                .chain(std::iter::once(text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| format!(" {} ", center(cells.get(i).copied().unwrap_or(""), w)))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Render a grid table with every cell centered
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let mut lines = Vec::with_capacity(rows.len() + 4);

    lines.push(border(&widths, "┌", "┬", "┐"));
    lines.push(table_line(headers, &widths));
    lines.push(border(&widths, "├", "┼", "┤"));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(table_line(&cells, &widths));
    }
    lines.push(border(&widths, "└", "┴", "┘"));

    lines.join("\n")
}

/// Width in characters of the table `render_table` would produce
pub fn table_width(headers: &[&str], rows: &[Vec<String>]) -> usize {
    let widths = column_widths(headers, rows);
    widths.iter().map(|w| w + 3).sum::<usize>() + 1
}

fn numbered_rows(items: &[&str]) -> Vec<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| vec![(i + 1).to_string(), item.to_string()])
        .collect()
}

fn render_titled(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let width = table_width(headers, rows);
    let title_line = center(&format!("===== {} =====", title), width);
    format!(
        "\n{}\n{}\n{}",
        OutputStyle::title(&title_line),
        render_table(headers, rows),
        "═".repeat(width)
    )
}

/// Render a numbered menu under a centered title
pub fn render_menu(title: &str, items: &[&str]) -> String {
    render_titled(title, &["No.", "Option"], &numbered_rows(items))
}

/// Render the numbered options of a [`Choice`] type
pub fn render_options<T: Choice>(title: &str) -> String {
    let labels: Vec<&str> = T::all().iter().map(|option| option.label()).collect();
    render_titled(title, &["No.", "Description"], &numbered_rows(&labels))
}

pub fn student_row(student: &Student) -> Vec<String> {
    let mut row = vec![
        student.id.clone(),
        student.name.clone(),
        student.gender.to_string(),
        student.program.to_string(),
        student.enrollment_year.to_string(),
        student.learning_method.to_string(),
        student.schedule.to_string(),
    ];
    row.extend(student.module_scores.iter().map(|score| score.to_string()));
    row
}

/// Render records as a titled table, or the empty-result notice
pub fn render_students(students: &[&Student]) -> String {
    if students.is_empty() {
        return format!(
            "{}",
            OutputStyle::warning("No data found matching the search criteria!")
        );
    }

    let rows: Vec<Vec<String>> = students.iter().map(|s| student_row(s)).collect();
    let width = table_width(&STUDENT_HEADERS, &rows);
    let title_line = center("===== Student Records =====", width);
    format!(
        "\n{}\n{}",
        OutputStyle::title(&title_line),
        render_table(&STUDENT_HEADERS, &rows)
    )
}

/// One line per record for the `simple` list format
pub fn format_student_line(student: &Student) -> String {
    format!(
        "{} {} [{}] {} {} {} {} modules: {} (avg {:.2})",
        OutputStyle::id(&student.id),
        OutputStyle::name(&student.name),
        student.program,
        student.enrollment_year,
        student.gender,
        student.learning_method,
        student.schedule,
        student
            .module_scores
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/"),
        student.average_score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Gender;
    use crate::core::data::tests::student;

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn test_table_lines_have_equal_width() {
        let rows = vec![
            vec!["1".to_string(), "Report Student Data".to_string()],
            vec!["10".to_string(), "Exit".to_string()],
        ];
        let table = render_table(&["No.", "Option"], &rows);
        let width = table_width(&["No.", "Option"], &rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            assert_eq!(line.chars().count(), width, "line: {}", line);
        }
        assert!(table.contains("│ Report Student Data │"));
    }

    #[test]
    fn test_menu_numbers_items() {
        let menu = render_menu("Main Menu", &["Report", "Exit"]);
        assert!(menu.contains("===== Main Menu ====="));
        assert!(menu.contains("│  1  │"));
        assert!(menu.contains("Exit"));
    }

    #[test]
    fn test_options_list_every_variant() {
        let options = render_options::<Gender>("Choose Gender");
        assert!(options.contains("Male"));
        assert!(options.contains("Female"));
        assert!(options.contains("Description"));
    }

    #[test]
    fn test_student_table() {
        let a = student("MH001", "Andi Wijaya");
        let rendered = render_students(&[&a]);
        assert!(rendered.contains("Student Records"));
        assert!(rendered.contains("Andi Wijaya"));
        assert!(rendered.contains("Data Science & Machine Learning"));
        assert!(rendered.contains("Module 3"));

        assert!(render_students(&[]).contains("No data found"));
    }

    #[test]
    fn test_student_row_has_every_column() {
        let row = student_row(&student("MH001", "Andi Wijaya"));
        assert_eq!(row.len(), STUDENT_HEADERS.len());
        assert_eq!(row[4], "2021");
        assert_eq!(row[7..], ["80", "90", "70"]);
    }

    #[test]
    fn test_student_line() {
        let line = format_student_line(&student("MH001", "Andi Wijaya"));
        assert!(line.contains("[Data Science & Machine Learning] 2021"));
        assert!(line.ends_with("modules: 80/90/70 (avg 80.00)"));
    }
}
