use serde::{Deserialize, Serialize};

/// A single student record: identity plus an ordered list of grades.
///
/// Records are created fully-formed and never mutated afterwards. The
/// average is always derived from `grades` on demand, so it cannot go
/// stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32, grades: Vec<f64>) -> Self {
        Student {
            name: name.into(),
            age,
            grades,
        }
    }

    /// Arithmetic mean of this student's grades.
    ///
    /// Returns `0.0` when the student has no grades. The zero is a
    /// sentinel, not an error condition.
    pub fn average(&self) -> f64 {
        crate::stats::mean(&self.grades)
    }
}
