pub mod grade;
pub mod output;
pub mod report;
pub mod roster;
pub mod stats;
pub mod student;
