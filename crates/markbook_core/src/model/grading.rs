//! Grading engine: pure coursework/exam arithmetic and letter banding.
//!
//! # Responsibility
//! - Compute coursework totals, overall percentages and letter grades.
//! - Stay side-effect free so derived-field refresh is trivially repeatable.
//!
//! # Invariants
//! - The percentage denominator is the fixed 160-point scale
//!   (60 coursework + 100 exam), never recomputed from actual inputs.
//! - Band edges are inclusive on their lower bound, highest band wins.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Maximum coursework points across the three components.
pub const COURSEWORK_MAX: i64 = 60;
/// Maximum exam points.
pub const EXAM_MAX: i64 = 100;

/// Letter grade band for an overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Sums the coursework components.
///
/// Length and range are the caller's concern; negative or oversized marks are
/// summed as given.
pub fn coursework_total(marks: &[i64]) -> i64 {
    marks.iter().sum()
}

/// Combines coursework total and exam score on the fixed 160-point scale.
///
/// Out-of-range inputs produce percentages outside [0, 100]; that is accepted
/// output, not an error.
pub fn overall_percentage(coursework_total: i64, exam: i64) -> f64 {
    let total_possible = (COURSEWORK_MAX + EXAM_MAX) as f64;
    (coursework_total + exam) as f64 / total_possible * 100.0
}

/// Maps an overall percentage to its letter band.
pub fn letter_grade(percentage: f64) -> Grade {
    if percentage >= 70.0 {
        Grade::A
    } else if percentage >= 60.0 {
        Grade::B
    } else if percentage >= 50.0 {
        Grade::C
    } else if percentage >= 40.0 {
        Grade::D
    } else {
        Grade::F
    }
}

#[cfg(test)]
mod tests {
    use super::{coursework_total, letter_grade, overall_percentage, Grade};

    #[test]
    fn coursework_total_sums_as_given() {
        assert_eq!(coursework_total(&[10, 10, 10]), 30);
        assert_eq!(coursework_total(&[-5, 2, 40]), 37);
        assert_eq!(coursework_total(&[]), 0);
    }

    #[test]
    fn percentage_uses_fixed_denominator() {
        assert_eq!(overall_percentage(30, 50), 50.0);
        assert_eq!(overall_percentage(60, 100), 100.0);
        assert_eq!(overall_percentage(0, 0), 0.0);
        // Out-of-range inputs are computed through, not clamped.
        assert!(overall_percentage(90, 120) > 100.0);
        assert!(overall_percentage(-10, 0) < 0.0);
    }

    #[test]
    fn band_edges_are_inclusive_on_lower_bound() {
        assert_eq!(letter_grade(70.0), Grade::A);
        assert_eq!(letter_grade(69.99), Grade::B);
        assert_eq!(letter_grade(60.0), Grade::B);
        assert_eq!(letter_grade(59.99), Grade::C);
        assert_eq!(letter_grade(50.0), Grade::C);
        assert_eq!(letter_grade(49.99), Grade::D);
        assert_eq!(letter_grade(40.0), Grade::D);
        assert_eq!(letter_grade(39.99), Grade::F);
    }
}
