//! # Validator Module
//!
//! Business rules for a candidate student record.
//!
//! - Validate before the roster is touched
//! - Reject malformed input with a typed reason
//! - One numeric policy: age and grades both parse as finite `f64`
//! - No side effects

use crate::ValidationError;
use crate::primitives::{GRADE_SEPARATOR, MAX_GRADE, MAX_GRADES, MAX_NAME_LENGTH, MIN_GRADE};

/// Validate a candidate record.
///
/// A record is valid if:
/// - The name is non-empty after trimming and within length limits
/// - The age is a finite number greater than zero
/// - Every grade lies in `[MIN_GRADE, MAX_GRADE]`
///
/// Rules are checked in that order; the first failing rule is returned.
/// An empty grade sequence is valid.
pub fn validate(name: &str, age: f64, grades: &[f64]) -> Result<(), ValidationError> {
    check_name(name)?;
    check_age(age)?;

    if grades.len() > MAX_GRADES {
        return Err(ValidationError::TooManyGrades);
    }

    if let Some(&grade) = grades
        .iter()
        .find(|grade| !(MIN_GRADE..=MAX_GRADE).contains(*grade))
    {
        return Err(ValidationError::GradeOutOfRange(grade));
    }

    Ok(())
}

/// Check the name rule on its own.
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }

    Ok(())
}

/// Check the age rule on its own: a finite number greater than zero.
pub fn check_age(age: f64) -> Result<(), ValidationError> {
    if !age.is_finite() || age <= 0.0 {
        return Err(ValidationError::InvalidAge);
    }
    Ok(())
}

/// Parse a raw age answer.
///
/// Returns `ValidationError::InvalidAge` if the text is not a number.
/// Range checks are left to [`check_age`].
pub fn parse_age(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAge)
}

/// Parse a raw, comma separated grades answer.
///
/// A blank line is the empty sequence. Each piece is trimmed; a piece that
/// does not parse as a finite number (including the empty piece left by a
/// trailing comma) is `ValidationError::NotANumber`. Negative zero is
/// stored as `0`.
pub fn parse_grades(raw: &str) -> Result<Vec<f64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let pieces: Vec<&str> = raw.split(GRADE_SEPARATOR).map(str::trim).collect();
    if pieces.len() > MAX_GRADES {
        return Err(ValidationError::TooManyGrades);
    }

    pieces
        .into_iter()
        .map(|piece| match piece.parse::<f64>() {
            Ok(grade) if grade.is_finite() => Ok(grade + 0.0),
            _ => Err(ValidationError::NotANumber(piece.to_string())),
        })
        .collect()
}
