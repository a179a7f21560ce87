//! # Roster Store
//!
//! Insertion-ordered, in-memory collection of validated students.
//!
//! The roster is append-only: there is no update or delete, and duplicate
//! names coexist as separate entries.

use crate::StudentRecord;

/// Ordered sequence of student records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end.
    pub fn append(&mut self, record: StudentRecord) {
        self.students.push(record);
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Case-insensitive substring search on names.
    ///
    /// Matches are returned in roster order. An empty term matches every
    /// record; no match yields an empty vector.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&StudentRecord> {
        let needle = term.to_lowercase();
        self.students
            .iter()
            .filter(|student| student.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True when no student has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
