//! Record store: the ordered in-memory roster and its mutation surface.
//!
//! # Responsibility
//! - Own the ordered collection of student records for the session.
//! - Keep derived grading fields synchronized on every mutation and flush the
//!   whole store through the repository before any mutation returns.
//!
//! # Invariants
//! - No partial mutation: input parsing happens before any in-memory field
//!   changes, persistence happens only after the memory change fully applied.
//! - Record order is meaningful; it is display order and file order.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod roster;
pub mod view;

pub use roster::{Roster, StudentInput};
pub use view::RosterView;

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error surface the presentation layer sees from store operations.
#[derive(Debug)]
pub enum StoreError {
    /// A persisted row did not split into six fields with four integers.
    /// Aborts the load; line numbers count from the file's first line.
    MalformedRow { line: usize, message: String },
    /// A create/update numeric input failed to parse. The store is unchanged.
    Validation(String),
    /// A delete/update/lookup index fell outside the current sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// An extremal query was asked of a store with zero records.
    EmptyStore,
    /// The backing file failed after the in-memory mutation applied; memory
    /// and disk diverge until the next successful write.
    Persistence(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRow { line, message } => {
                write!(f, "malformed marks row at line {line}: {message}")
            }
            Self::Validation(message) => write!(f, "invalid student input: {message}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for {len} records")
            }
            Self::EmptyStore => write!(f, "the roster has no records"),
            Self::Persistence(err) => write!(f, "failed to persist roster: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}
