//! Roster store: ordered student records with write-through persistence.
//!
//! # Responsibility
//! - Provide the create/delete/update/sort surface presentation code calls.
//! - Run the grading engine on every mutation and flush through the
//!   repository before returning.
//!
//! # Invariants
//! - Every record in the sequence carries derived fields the grading engine
//!   would compute from its current source fields.
//! - A mutation that returns `Ok` has already rewritten the backing file.
//! - Ids are never changed by update; insertion order is preserved by create.

use crate::model::student::{StudentId, StudentRecord};
use crate::repo::{MarksRepository, RepoError};
use crate::store::view::RosterView;
use crate::store::{StoreError, StoreResult};
use log::{info, warn};

/// Form-level input for create/update: numeric fields arrive as the raw
/// strings the user typed, and parsing them is the store's first step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub marks: [String; 3],
    pub exam: String,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, marks: [&str; 3], exam: &str) -> Self {
        Self {
            name: name.into(),
            marks: marks.map(str::to_string),
            exam: exam.to_string(),
        }
    }
}

/// The session-scoped record store.
///
/// Owns the ordered sequence exclusively; the repository only ever sees
/// borrowed read access, and views borrow the live sequence with no caching.
#[derive(Debug)]
pub struct Roster<R: MarksRepository> {
    records: Vec<StudentRecord>,
    repo: R,
}

impl<R: MarksRepository> Roster<R> {
    /// Loads the roster from the repository once at session start.
    ///
    /// A missing backing file degrades to an empty roster (logged, not
    /// fatal); a row that fails to parse aborts the load.
    pub fn load(repo: R) -> StoreResult<Self> {
        let rows = match repo.read_rows() {
            Ok(rows) => rows,
            Err(RepoError::Missing(path)) => {
                warn!(
                    "event=roster_load status=missing_file path={}",
                    path.display()
                );
                Vec::new()
            }
            Err(RepoError::MalformedHeader { found }) => {
                return Err(StoreError::MalformedRow {
                    line: 1,
                    message: format!("record-count header is not an integer: `{found}`"),
                })
            }
            Err(err) => return Err(StoreError::Persistence(err)),
        };

        let mut records = Vec::with_capacity(rows.len());
        for (offset, raw) in rows.iter().enumerate() {
            // The count header occupies line 1.
            records.push(parse_row(offset + 2, raw)?);
        }

        info!("event=roster_load status=ok records={}", records.len());
        Ok(Self { records, repo })
    }

    /// Appends a new record, persists, and returns it.
    pub fn create(&mut self, id: impl Into<StudentId>, input: &StudentInput) -> StoreResult<StudentRecord> {
        let (marks, exam) = parse_input(input)?;
        let record = StudentRecord::new(id, input.name.clone(), marks, exam);
        self.records.push(record.clone());
        self.persist()?;

        info!(
            "event=record_created id={} records={}",
            record.id(),
            self.records.len()
        );
        Ok(record)
    }

    /// Removes and returns the record at `index`, persisting on success.
    pub fn delete_at(&mut self, index: usize) -> StoreResult<StudentRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        self.persist()?;

        info!(
            "event=record_deleted id={} records={}",
            removed.id(),
            self.records.len()
        );
        Ok(removed)
    }

    /// Replaces name/marks/exam at `index`, leaving the id untouched.
    ///
    /// Inputs are parsed in full before any field changes, so a validation
    /// failure leaves the record exactly as it was.
    pub fn update_at(&mut self, index: usize, input: &StudentInput) -> StoreResult<StudentRecord> {
        self.check_index(index)?;
        let (marks, exam) = parse_input(input)?;

        let record = &mut self.records[index];
        record.set_details(input.name.clone(), marks, exam);
        let updated = record.clone();
        self.persist()?;

        info!("event=record_updated id={}", updated.id());
        Ok(updated)
    }

    /// Stable in-place reorder by percentage, then persist.
    ///
    /// Ties keep their relative order in both directions.
    pub fn sort_by_percentage(&mut self, descending: bool) -> StoreResult<()> {
        if descending {
            self.records
                .sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
        } else {
            self.records
                .sort_by(|a, b| a.percentage().total_cmp(&b.percentage()));
        }
        self.persist()?;

        info!("event=roster_sorted descending={descending}");
        Ok(())
    }

    /// First record attaining the maximum percentage in sequence order.
    pub fn highest_by_percentage(&self) -> StoreResult<&StudentRecord> {
        self.records
            .iter()
            .reduce(|best, candidate| {
                if candidate.percentage() > best.percentage() {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(StoreError::EmptyStore)
    }

    /// First record attaining the minimum percentage in sequence order.
    pub fn lowest_by_percentage(&self) -> StoreResult<&StudentRecord> {
        self.records
            .iter()
            .reduce(|best, candidate| {
                if candidate.percentage() < best.percentage() {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(StoreError::EmptyStore)
    }

    /// Read-only view over the live sequence.
    pub fn view(&self) -> RosterView<'_> {
        RosterView::new(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        let len = self.records.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        self.repo
            .write_all(&self.records)
            .map_err(StoreError::Persistence)
    }
}

/// Parses one persisted row: exactly 6 comma fields, 4 of them integers.
fn parse_row(line: usize, raw: &str) -> StoreResult<StudentRecord> {
    let fields: Vec<&str> = raw.trim().split(',').collect();
    if fields.len() != 6 {
        return Err(StoreError::MalformedRow {
            line,
            message: format!(
                "expected 6 comma-separated fields, found {}",
                fields.len()
            ),
        });
    }

    let marks = [
        parse_row_int(line, "coursework mark 1", fields[2])?,
        parse_row_int(line, "coursework mark 2", fields[3])?,
        parse_row_int(line, "coursework mark 3", fields[4])?,
    ];
    let exam = parse_row_int(line, "exam score", fields[5])?;

    Ok(StudentRecord::new(fields[0], fields[1], marks, exam))
}

fn parse_row_int(line: usize, label: &str, value: &str) -> StoreResult<i64> {
    value.trim().parse::<i64>().map_err(|_| StoreError::MalformedRow {
        line,
        message: format!("{label} is not an integer: `{value}`"),
    })
}

/// Parses form input ahead of any mutation so failures leave no trace.
fn parse_input(input: &StudentInput) -> StoreResult<([i64; 3], i64)> {
    let marks = [
        parse_input_int("coursework mark 1", &input.marks[0])?,
        parse_input_int("coursework mark 2", &input.marks[1])?,
        parse_input_int("coursework mark 3", &input.marks[2])?,
    ];
    let exam = parse_input_int("exam mark", &input.exam)?;
    Ok((marks, exam))
}

fn parse_input_int(label: &str, value: &str) -> StoreResult<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        StoreError::Validation(format!("{label} is not an integer: `{value}`"))
    })
}
