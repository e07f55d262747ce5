//! Persistence boundary for the flat marks file.
//!
//! # Responsibility
//! - Define the repository contract the record store persists through.
//! - Keep file-format and I/O details out of store/business orchestration.
//!
//! # Invariants
//! - `write_all` serializes the full store every call (write-through, no
//!   batching, no incremental append).
//! - Raw rows are handed back unparsed; field-level parsing is the store's
//!   concern.

use crate::model::student::StudentRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod marks_file;

pub use marks_file::FlatFileMarks;

pub type RepoResult<T> = Result<T, RepoError>;

/// Transport-level error for the marks file.
#[derive(Debug)]
pub enum RepoError {
    /// The backing file does not exist. Load paths degrade to an empty store.
    Missing(PathBuf),
    /// The leading record-count line is not an integer.
    MalformedHeader { found: String },
    Io(std::io::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "marks file not found: {}", path.display()),
            Self::MalformedHeader { found } => {
                write!(f, "marks file header is not a record count: `{found}`")
            }
            Self::Io(err) => write!(f, "marks file I/O failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Missing(_) | Self::MalformedHeader { .. } => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Repository contract for reading and rewriting the roster.
pub trait MarksRepository {
    /// Reads and discards the record-count header, then returns the remaining
    /// lines raw, in file order.
    fn read_rows(&self) -> RepoResult<Vec<String>>;

    /// Truncates and rewrites the whole file from the given records.
    fn write_all(&self, records: &[StudentRecord]) -> RepoResult<()>;
}
