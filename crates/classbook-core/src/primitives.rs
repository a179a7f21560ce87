//! # Grading Primitives
//!
//! Hardcoded constants for the Classbook CORE.
//!
//! These values are compiled into the binary and are immutable at runtime.
//!
//! ## Primitives
//!
//! 1. **Grade Scale**: every grade lives in `[MIN_GRADE, MAX_GRADE]`.
//! 2. **Standing Thresholds**: averages split into approved, recovery, failed.
//! 3. **Input Limits**: bound the size of a single registration.

/// Lowest grade accepted by the Validator.
pub const MIN_GRADE: f64 = 0.0;

/// Highest grade accepted by the Validator.
pub const MAX_GRADE: f64 = 10.0;

/// Minimum average for the Approved bucket.
///
/// - `average >= APPROVAL_THRESHOLD` is Approved.
pub const APPROVAL_THRESHOLD: f64 = 7.0;

/// Minimum average for the Recovery bucket.
///
/// - `RECOVERY_THRESHOLD <= average < APPROVAL_THRESHOLD` is Recovery.
/// - Anything below is Failed.
pub const RECOVERY_THRESHOLD: f64 = 5.0;

/// Separator between grades on a single input line.
pub const GRADE_SEPARATOR: char = ',';

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length of a student name, in characters (after trimming).
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum number of grades accepted in one registration.
pub const MAX_GRADES: usize = 1000;
