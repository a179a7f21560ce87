//! # Class Report
//!
//! One pass over the roster that gathers everything the report view shows:
//! class average, best student and the three standing buckets.
//!
//! Entries are owned copies (name + average), so the report can be rendered
//! or serialized without borrowing the roster.

use crate::aggregator::{best_student, bucketize, class_average};
use crate::{Roster, Standing, StudentRecord};
use serde::Serialize;

/// A name with its average, as shown in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub average: f64,
}

impl From<&StudentRecord> for ReportEntry {
    fn from(student: &StudentRecord) -> Self {
        Self {
            name: student.name().to_string(),
            average: student.average(),
        }
    }
}

/// Aggregate report for the whole class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub student_count: usize,
    pub class_average: f64,
    pub best_student: Option<ReportEntry>,
    pub approved: Vec<ReportEntry>,
    pub recovery: Vec<ReportEntry>,
    pub failed: Vec<ReportEntry>,
}

impl ClassReport {
    /// Compute the report for the current roster.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        let students = roster.all();
        let buckets = bucketize(students);
        let entries = |list: &[&StudentRecord]| -> Vec<ReportEntry> {
            list.iter().map(|s| ReportEntry::from(*s)).collect()
        };

        Self {
            student_count: students.len(),
            class_average: class_average(students),
            best_student: best_student(students).map(ReportEntry::from),
            approved: entries(&buckets.approved),
            recovery: entries(&buckets.recovery),
            failed: entries(&buckets.failed),
        }
    }

    /// Entries in one bucket.
    #[must_use]
    pub fn bucket(&self, standing: Standing) -> &[ReportEntry] {
        match standing {
            Standing::Approved => &self.approved,
            Standing::Recovery => &self.recovery,
            Standing::Failed => &self.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn empty_roster_report() {
        let report = ClassReport::from_roster(&Roster::new());
        assert_eq!(report.student_count, 0);
        assert_eq!(report.class_average, 0.0);
        assert!(report.best_student.is_none());
        assert!(report.approved.is_empty());
        assert!(report.recovery.is_empty());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn report_collects_buckets_and_best() -> Result<(), ValidationError> {
        let mut roster = Roster::new();
        roster.append(StudentRecord::new("Ana", 20.0, vec![8.0, 9.0, 7.0])?);
        roster.append(StudentRecord::new("Bob", 19.0, vec![4.0, 5.0])?);

        let report = ClassReport::from_roster(&roster);
        assert_eq!(report.class_average, 6.25);
        assert_eq!(
            report.best_student,
            Some(ReportEntry {
                name: "Ana".to_string(),
                average: 8.0
            })
        );
        assert_eq!(report.bucket(Standing::Approved).len(), 1);
        assert!(report.bucket(Standing::Recovery).is_empty());
        assert_eq!(report.bucket(Standing::Failed)[0].name, "Bob");
        Ok(())
    }
}
