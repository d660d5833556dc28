//! Output formatting for students and rosters.
//!
//! The demo driver's stdout lines are built here; diagnostics go through
//! `tracing` so stdout carries only the report text itself.

use anyhow::Result;
use tracing::debug;

use crate::report::RosterReport;
use crate::roster::Roster;
use crate::student::Student;

/// Renders a grade list as `[85, 90, 92]`.
///
/// Whole-number grades print without a decimal point because f64
/// `Display` drops the trailing `.0`.
pub fn format_grades(grades: &[f64]) -> String {
    let inner = grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

/// Renders one student's listing line:
/// `Name: <name>, Age: <age>, Grades: <grades>, Average Grade: <average>`.
pub fn format_student(student: &Student) -> String {
    format!(
        "Name: {}, Age: {}, Grades: {}, Average Grade: {}",
        student.name,
        student.age,
        format_grades(&student.grades),
        student.average()
    )
}

/// Prints every student in insertion order, one line each.
pub fn list_students(roster: &Roster) {
    debug!(count = roster.len(), "Listing roster");
    for student in roster.students() {
        println!("{}", format_student(student));
    }
}

/// Renders the lookup result line for `find(name)`.
pub fn format_lookup(name: &str, found: Option<&Student>) -> String {
    match found {
        Some(student) => format!(
            "Found student: {}, Age: {}, Grades: {}, Average Grade: {}",
            student.name,
            student.age,
            format_grades(&student.grades),
            student.average()
        ),
        None => format!("Student with name {} not found.", name),
    }
}

/// Prints a [`RosterReport`] as pretty JSON to stdout.
pub fn print_json(report: &RosterReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
