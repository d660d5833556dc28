//! CLI entry point for the student roster tool.
//!
//! Invoked with no arguments it runs the fixed demonstration sequence:
//! seed a roster, list it, look up a student by name, and print the
//! roster-wide average. The `report` subcommand emits the same roster as
//! a JSON summary instead.

use anyhow::Result;
use clap::{Parser, Subcommand};
use student_roster::output::{format_lookup, list_students, print_json};
use student_roster::report::build_report;
use student_roster::roster::Roster;
use student_roster::student::Student;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_roster")]
#[command(about = "An in-memory student roster with average-grade queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed demonstration sequence (default when no subcommand is given)
    Demo,
    /// Print the demonstration roster as a JSON summary report
    Report,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_roster.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_roster.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Report => {
            let roster = demo_roster();
            let report = build_report(&roster);
            info!(student_count = roster.len(), "Emitting roster report");
            print_json(&report)?;
            Ok(())
        }
    }
}

/// Builds the demonstration roster used by both subcommands.
fn demo_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 20, vec![85.0, 90.0, 92.0]));
    roster.add(Student::new("Bob", 22, vec![78.0, 81.0, 85.0]));
    roster.add(Student::new("Charlie", 19, vec![88.0, 79.0, 94.0]));
    roster
}

/// The fixed demonstration sequence: list, lookup, overall average.
#[tracing::instrument]
fn run_demo() -> Result<()> {
    let roster = demo_roster();
    info!(student_count = roster.len(), "Demo roster seeded");

    println!("Listing all students:");
    list_students(&roster);

    let student_name = "Bob";
    println!("\n{}", format_lookup(student_name, roster.find(student_name)));

    println!(
        "\nOverall average grade of all students: {}",
        roster.overall_average()
    );

    Ok(())
}
