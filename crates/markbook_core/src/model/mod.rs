//! Domain model for the student marks core.
//!
//! # Responsibility
//! - Define the canonical record type shared by store, persistence and views.
//! - Host the pure grading engine the record's derived fields come from.
//!
//! # Invariants
//! - Grading fields on a record are derived state, never independent inputs.

pub mod grading;
pub mod student;
