//! The roster: an owning, ordered, append-only collection of students.

use crate::stats::mean;
use crate::student::Student;

/// Ordered collection of [`Student`] records, insertion order preserved.
///
/// No deduplication is performed; two records with the same name may
/// coexist, and lookup returns the first match in insertion order.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Appends a student. Always succeeds; no duplicate check, no
    /// capacity bound.
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// All students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Linear scan for the first student whose name matches exactly
    /// (case-sensitive). `None` is the "not found" signal.
    pub fn find(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }

    /// Mean over the concatenation of every student's grades, in
    /// insertion order. A student with more grades contributes more
    /// weight; this is not a mean of per-student averages.
    ///
    /// Returns `0.0` for an empty roster or when no student has grades.
    pub fn overall_average(&self) -> f64 {
        let combined: Vec<f64> = self
            .students
            .iter()
            .flat_map(|s| s.grades.iter().copied())
            .collect();

        mean(&combined)
    }
}
