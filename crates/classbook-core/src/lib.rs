//! # classbook-core
//!
//! The roster engine for Classbook - THE LOGIC.
//!
//! This crate holds everything about students that is not terminal I/O:
//! validating a registration, storing it in insertion order, and computing
//! per-student and class-wide statistics.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Has no I/O, no async, no global state
//! - Only stores records that passed validation
//! - Never returns NaN: empty rosters and empty grade lists are explicit

// =============================================================================
// MODULES
// =============================================================================

pub mod aggregator;
pub mod primitives;
pub mod report;
pub mod roster;
pub mod types;
pub mod validator;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Standing, StudentRecord, ValidationError};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use aggregator::{Buckets, average, best_student, bucketize, class_average};
pub use report::{ClassReport, ReportEntry};
pub use roster::Roster;
pub use validator::{parse_age, parse_grades, validate};
