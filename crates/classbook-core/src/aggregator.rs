//! # Aggregator Module
//!
//! Per-student and class-wide statistics.
//!
//! All functions are read-only over the roster and never produce NaN:
//! empty inputs are handled explicitly.

use crate::{Standing, StudentRecord};

/// Arithmetic mean of a grade sequence.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn average(grades: &[f64]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    Some(grades.iter().sum::<f64>() / grades.len() as f64)
}

/// Mean of all per-student averages.
///
/// An empty roster averages `0.0`.
#[must_use]
pub fn class_average(students: &[StudentRecord]) -> f64 {
    let averages: Vec<f64> = students.iter().map(StudentRecord::average).collect();
    average(&averages).unwrap_or(0.0)
}

/// Student with the strictly highest average.
///
/// Ties keep the first student in roster order. Returns `None` when the
/// roster is empty.
#[must_use]
pub fn best_student(students: &[StudentRecord]) -> Option<&StudentRecord> {
    students.iter().fold(None, |best: Option<&StudentRecord>, current| match best {
        Some(leader) if current.average() <= leader.average() => Some(leader),
        _ => Some(current),
    })
}

/// The three standing buckets, each in roster order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets<'a> {
    pub approved: Vec<&'a StudentRecord>,
    pub recovery: Vec<&'a StudentRecord>,
    pub failed: Vec<&'a StudentRecord>,
}

impl Buckets<'_> {
    /// Total number of students across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.approved.len() + self.recovery.len() + self.failed.len()
    }

    /// True when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the roster by standing.
///
/// Every student lands in exactly one bucket.
#[must_use]
pub fn bucketize(students: &[StudentRecord]) -> Buckets<'_> {
    let mut buckets = Buckets::default();
    for student in students {
        match student.standing() {
            Standing::Approved => buckets.approved.push(student),
            Standing::Recovery => buckets.recovery.push(student),
            Standing::Failed => buckets.failed.push(student),
        }
    }
    buckets
}
