//! Student record domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, persistence and views.
//! - Keep grading-derived fields in lockstep with their source fields.
//!
//! # Invariants
//! - `coursework_total`, `percentage` and `grade` always equal what the
//!   grading engine computes from the current `marks` and `exam`. The fields
//!   are private and only ever written by the internal refresh step, so no
//!   caller can leave them stale.
//! - `id` is assigned at creation and never changes afterwards.

use crate::model::grading::{self, Grade};
use serde::Serialize;

/// Opaque caller-supplied student identifier.
///
/// Uniqueness is a convention of the data, not a rule the core enforces.
pub type StudentId = String;

/// One student's stored marks plus the grading fields computed from them.
///
/// Source fields (`name`, `marks`, `exam`) mutate only through
/// [`StudentRecord::set_details`], which re-runs the grading engine, so a
/// record can never be observed with stale derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    id: StudentId,
    name: String,
    marks: [i64; 3],
    exam: i64,
    coursework_total: i64,
    percentage: f64,
    grade: Grade,
}

impl StudentRecord {
    /// Builds a record and computes its derived fields in one step.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>, marks: [i64; 3], exam: i64) -> Self {
        let mut record = Self {
            id: id.into(),
            name: name.into(),
            marks,
            exam,
            coursework_total: 0,
            percentage: 0.0,
            grade: Grade::F,
        };
        record.refresh_derived();
        record
    }

    /// Replaces the mutable source fields and refreshes the derived ones.
    ///
    /// Identity is deliberately not part of this surface; updates never
    /// change `id`.
    pub fn set_details(&mut self, name: impl Into<String>, marks: [i64; 3], exam: i64) {
        self.name = name.into();
        self.marks = marks;
        self.exam = exam;
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.coursework_total = grading::coursework_total(&self.marks);
        self.percentage = grading::overall_percentage(self.coursework_total, self.exam);
        self.grade = grading::letter_grade(self.percentage);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> [i64; 3] {
        self.marks
    }

    pub fn exam(&self) -> i64 {
        self.exam
    }

    pub fn coursework_total(&self) -> i64 {
        self.coursework_total
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Percentage formatted the way every presentation surface renders it.
    pub fn percentage_display(&self) -> String {
        format!("{:.2}%", self.percentage)
    }

    /// `"<id> - <name>"` label used by selection lists.
    pub fn roster_label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}
