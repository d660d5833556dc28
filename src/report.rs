//! Serializable roster-wide summary.
//!
//! Collects per-student averages and letter grades plus aggregate
//! statistics over the combined grade sequence into a single report,
//! emitted as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grade::letter;
use crate::roster::Roster;
use crate::stats::{mean, stddev};

/// One student's line in the report.
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub(crate) name: String,
    pub(crate) age: u32,
    pub(crate) grade_count: usize,
    pub(crate) average: f64,
    pub(crate) letter: String,
}

/// Complete summary for a roster.
///
/// `overall_average` is the mean over the concatenation of every
/// student's grades, so students with more grades carry more weight.
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) student_count: usize,
    pub(crate) grade_count: usize,
    pub(crate) overall_average: f64,
    pub(crate) overall_letter: String,
    pub(crate) stddev: f64,
    pub(crate) students: Vec<StudentSummary>,
}

/// Builds a [`RosterReport`] from the current roster contents.
pub fn build_report(roster: &Roster) -> RosterReport {
    let students: Vec<StudentSummary> = roster
        .students()
        .iter()
        .map(|s| {
            let average = s.average();
            StudentSummary {
                name: s.name.clone(),
                age: s.age,
                grade_count: s.grades.len(),
                average,
                letter: letter(average),
            }
        })
        .collect();

    let combined: Vec<f64> = roster
        .students()
        .iter()
        .flat_map(|s| s.grades.iter().copied())
        .collect();

    let overall_average = mean(&combined);

    RosterReport {
        generated_at: Utc::now(),
        student_count: roster.len(),
        grade_count: combined.len(),
        overall_average,
        overall_letter: letter(overall_average),
        stddev: stddev(&combined, overall_average),
        students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Student;

    fn seeded() -> Roster {
        let mut roster = Roster::new();
        roster.add(Student::new("Alice", 20, vec![85.0, 90.0, 92.0]));
        roster.add(Student::new("Bob", 22, vec![78.0, 81.0, 85.0]));
        roster.add(Student::new("Charlie", 19, vec![88.0, 79.0, 94.0]));
        roster
    }

    #[test]
    fn test_report_empty_roster() {
        let report = build_report(&Roster::new());

        assert_eq!(report.student_count, 0);
        assert_eq!(report.grade_count, 0);
        assert_eq!(report.overall_average, 0.0);
        assert_eq!(report.overall_letter, "F");
        assert_eq!(report.stddev, 0.0);
        assert!(report.students.is_empty());
    }

    #[test]
    fn test_report_counts_and_overall() {
        let report = build_report(&seeded());

        assert_eq!(report.student_count, 3);
        assert_eq!(report.grade_count, 9);
        assert!((report.overall_average - 85.77777777777777).abs() < 1e-9);
        assert_eq!(report.overall_letter, "B");
    }

    #[test]
    fn test_report_per_student_summaries() {
        let report = build_report(&seeded());

        let bob = &report.students[1];
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.grade_count, 3);
        assert!((bob.average - 81.33333333333333).abs() < 1e-9);
        assert_eq!(bob.letter, "B");
    }

    #[test]
    fn test_report_overall_matches_roster_query() {
        let roster = seeded();
        let report = build_report(&roster);
        assert_eq!(report.overall_average, roster.overall_average());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = build_report(&seeded());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"overall_average\""));
        assert!(json.contains("\"Charlie\""));
    }
}
