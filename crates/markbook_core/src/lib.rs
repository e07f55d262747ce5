//! Core record-keeping logic for the student marks manager.
//! This crate is the single source of truth for grading and roster
//! invariants; presentation layers call in through the store surface and own
//! all user-facing feedback.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::grading::{coursework_total, letter_grade, overall_percentage, Grade};
pub use model::student::{StudentId, StudentRecord};
pub use repo::{FlatFileMarks, MarksRepository, RepoError, RepoResult};
pub use store::{Roster, RosterView, StoreError, StoreResult, StudentInput};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
