/// Converts a 0–100 grade average into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 97       | A+    |
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
pub fn letter(avg: f64) -> String {
    match avg {
        avg if avg >= 97.0 => "A+".into(),
        avg if avg >= 90.0 => "A".into(),
        avg if avg >= 80.0 => "B".into(),
        avg if avg >= 70.0 => "C".into(),
        avg if avg >= 60.0 => "D".into(),
        _ => "F".into(),
    }
}
