//! # Core Type Definitions
//!
//! This module contains all core types for the Classbook roster:
//! - The student record (`StudentRecord`)
//! - Grade standing buckets (`Standing`)
//! - Error types (`ValidationError`)
//!
//! ## Construction Guarantees
//!
//! A `StudentRecord` can only be built through the Validator, so every
//! record that exists has passed the business rules. Fields are private and
//! there is no mutation API.

use crate::primitives::{APPROVAL_THRESHOLD, MAX_GRADES, MAX_NAME_LENGTH, RECOVERY_THRESHOLD};
use crate::{aggregator, validator};
use thiserror::Error;

// =============================================================================
// STUDENT RECORD
// =============================================================================

/// One roster entry: a validated name, age and grade sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    age: f64,
    grades: Vec<f64>,
}

impl StudentRecord {
    /// Build a record from already-parsed values.
    ///
    /// The name is trimmed before it is stored.
    pub fn new(name: &str, age: f64, grades: Vec<f64>) -> Result<Self, ValidationError> {
        validator::validate(name, age, &grades)?;
        Ok(Self {
            name: name.trim().to_string(),
            age,
            grades,
        })
    }

    /// Build a record from the three raw answers of a registration.
    ///
    /// Checks run in the order name, age, grades so that an empty name is
    /// always reported first, whatever the other answers hold.
    pub fn from_input(name: &str, age_raw: &str, grades_raw: &str) -> Result<Self, ValidationError> {
        validator::check_name(name)?;
        let age = validator::parse_age(age_raw)?;
        validator::check_age(age)?;
        let grades = validator::parse_grades(grades_raw)?;
        Self::new(name, age, grades)
    }

    /// Get the trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the age.
    #[must_use]
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Get the grades in the order they were entered.
    #[must_use]
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Per-student average.
    ///
    /// A student with no grades averages `0.0`.
    #[must_use]
    pub fn average(&self) -> f64 {
        aggregator::average(&self.grades).unwrap_or(0.0)
    }

    /// Bucket this student falls into.
    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing::classify(self.average())
    }
}

// =============================================================================
// STANDING
// =============================================================================

/// Result bucket for an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// average >= 7
    Approved,
    /// 5 <= average < 7
    Recovery,
    /// average < 5
    Failed,
}

impl Standing {
    /// Classify an average into exactly one bucket.
    #[must_use]
    pub fn classify(average: f64) -> Self {
        if average >= APPROVAL_THRESHOLD {
            Standing::Approved
        } else if average >= RECOVERY_THRESHOLD {
            Standing::Recovery
        } else {
            Standing::Failed
        }
    }

    /// Section title used in reports.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Standing::Approved => "Aprovados (média >= 7)",
            Standing::Recovery => "Recuperação (5.0 - 6.9)",
            Standing::Failed => "Reprovados (média < 5)",
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Reasons a registration is rejected.
///
/// Display strings are the user-facing messages. Every variant is
/// recoverable: the roster is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    #[error("Nome não pode ser vazio")]
    EmptyName,

    /// Name exceeds `MAX_NAME_LENGTH` characters.
    #[error("Nome não pode ter mais de {max} caracteres", max = MAX_NAME_LENGTH)]
    NameTooLong,

    /// Age is not a number or not positive.
    #[error("Idade deve ser um número positivo")]
    InvalidAge,

    /// A grade lies outside `[0, 10]`.
    #[error("Notas devem estar entre 0 e 10 (recebido: {0})")]
    GradeOutOfRange(f64),

    /// A grade could not be parsed as a number.
    #[error("Nota inválida: '{0}' não é um número")]
    NotANumber(String),

    /// More grades than `MAX_GRADES` on one line.
    #[error("Máximo de {max} notas por estudante", max = MAX_GRADES)]
    TooManyGrades,
}

// =============================================================================
// TESTS
// =============================================================================
