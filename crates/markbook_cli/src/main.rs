//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `markbook_core` linkage: load a
//!   marks file and print the roster table a GUI front end would render.
//! - Keep output deterministic for quick local sanity checks.

use markbook_core::{FlatFileMarks, Roster};
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "studentMarks.txt".to_string());

    let roster = match Roster::load(FlatFileMarks::new(&path)) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("markbook: failed to load `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("markbook_core version={}", markbook_core::core_version());
    println!("roster {path}: {} record(s)", roster.len());
    for record in roster.view().all() {
        println!(
            "{:<10} {:<24} coursework={:<4} exam={:<4} overall={:<8} grade={}",
            record.id(),
            record.name(),
            record.coursework_total(),
            record.exam(),
            record.percentage_display(),
            record.grade()
        );
    }

    ExitCode::SUCCESS
}
