use crate::core::data::RosterStats;
use crate::utils::output::OutputStyle;
use std::fmt::Display;

/// Utilities for displaying roster statistics
pub struct StatsCalculator;

impl StatsCalculator {
    /// Render formatted roster statistics
    pub fn render(stats: &RosterStats) -> String {
        let mut lines = vec![
            format!("{}", OutputStyle::title("📊 Roster Statistics")),
            OutputStyle::header_separator(),
            field("Total students", &stats.total_students.to_string()),
        ];

        if let Some(overall) = stats.overall_average {
            lines.push(field("Average score", &format!("{:.2}", overall)));
        }
        if let Some(averages) = stats.module_averages {
            for (i, avg) in averages.iter().enumerate() {
                lines.push(field(&format!("Module {}", i + 1), &format!("{:.2}", avg)));
            }
        }

        push_counts(&mut lines, "Programs", &stats.program_counts);
        push_counts(&mut lines, "Gender", &stats.gender_counts);
        push_counts(&mut lines, "Learning methods", &stats.method_counts);
        push_counts(&mut lines, "Schedules", &stats.schedule_counts);

        lines.join("\n")
    }
}

fn field(label: &str, value: &str) -> String {
    format!("{:>16}: {}", OutputStyle::label(label), OutputStyle::info(value))
}

fn push_counts<T: Display>(lines: &mut Vec<String>, heading: &str, counts: &[(T, usize)]) {
    if counts.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("{}:", OutputStyle::header(heading)));
    for (option, count) in counts {
        lines.push(format!("  {}: {}", option, OutputStyle::info(&count.to_string())));
    }
}
