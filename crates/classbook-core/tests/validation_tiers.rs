//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the roster engine is INVALID.
//!
//! ## Tiers
//! - T0: Registration Integrity
//! - T1: Roster Ordering & Search
//! - T2: Per-Student Statistics
//! - T3: Class Report

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use classbook_core::{ClassReport, Roster, Standing, StudentRecord, ValidationError};

fn register(roster: &mut Roster, name: &str, age: &str, grades: &str) -> Result<(), ValidationError> {
    let record = StudentRecord::from_input(name, age, grades)?;
    roster.append(record);
    Ok(())
}

// =============================================================================
// TIER T0: REGISTRATION INTEGRITY
// =============================================================================

mod t0_registration_integrity {
    use super::*;

    /// T0.1: A well-formed registration is accepted.
    #[test]
    fn valid_registration_accepted() {
        let mut roster = Roster::new();
        register(&mut roster, "Ana", "20", "8, 9, 7").unwrap();
        assert_eq!(roster.len(), 1);
    }

    /// T0.2: Out-of-range grade leaves the roster unchanged.
    #[test]
    fn out_of_range_grade_rejected() {
        let mut roster = Roster::new();
        let result = register(&mut roster, "Ana", "20", "11,5");
        assert_eq!(result, Err(ValidationError::GradeOutOfRange(11.0)));
        assert!(roster.is_empty());
    }

    /// T0.3: Non-numeric age is InvalidAge, not a crash.
    #[test]
    fn non_numeric_age_rejected() {
        let mut roster = Roster::new();
        let result = register(&mut roster, "Ana", "abc", "8");
        assert_eq!(result, Err(ValidationError::InvalidAge));
        assert!(roster.is_empty());
    }

    /// T0.4: Non-numeric grade is NotANumber.
    #[test]
    fn non_numeric_grade_rejected() {
        let mut roster = Roster::new();
        let result = register(&mut roster, "Ana", "20", "8,oito");
        assert!(matches!(result, Err(ValidationError::NotANumber(ref s)) if s == "oito"));
        assert!(roster.is_empty());
    }

    /// T0.5: Blank name wins over every other failure.
    #[test]
    fn blank_name_reported_first() {
        let mut roster = Roster::new();
        let result = register(&mut roster, "   ", "-1", "42");
        assert_eq!(result, Err(ValidationError::EmptyName));
    }
}

// =============================================================================
// TIER T1: ROSTER ORDERING & SEARCH
// =============================================================================

mod t1_roster_ordering {
    use super::*;

    /// T1.1: Search finds every case-insensitive substring match in order.
    #[test]
    fn search_an_finds_ana_and_dan() {
        let mut roster = Roster::new();
        register(&mut roster, "Ana", "20", "8").unwrap();
        register(&mut roster, "Bruno", "21", "6").unwrap();
        register(&mut roster, "Dan", "22", "5").unwrap();

        let names: Vec<_> = roster.search("an").iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Ana", "Dan"]);
    }

    /// T1.2: Listing keeps insertion order.
    #[test]
    fn listing_keeps_insertion_order() {
        let mut roster = Roster::new();
        for name in ["Zoe", "Ana", "Maria"] {
            register(&mut roster, name, "18", "7").unwrap();
        }
        let names: Vec<_> = roster.all().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Zoe", "Ana", "Maria"]);
    }
}

// =============================================================================
// TIER T2: PER-STUDENT STATISTICS
// =============================================================================

mod t2_student_statistics {
    use super::*;

    /// T2.1: Ana averages 8.00.
    #[test]
    fn ana_average() {
        let record = StudentRecord::from_input("Ana", "20", "8, 9, 7").unwrap();
        assert_eq!(format!("{:.2}", record.average()), "8.00");
        assert_eq!(record.standing(), Standing::Approved);
    }

    /// T2.2: A student without grades averages zero instead of NaN.
    #[test]
    fn empty_grades_average_zero() {
        let record = StudentRecord::from_input("Ana", "20", "").unwrap();
        assert!(record.grades().is_empty());
        assert_eq!(record.average(), 0.0);
    }
}

// =============================================================================
// TIER T3: CLASS REPORT
// =============================================================================

mod t3_class_report {
    use super::*;

    /// T3.1: Bob at 4.50 lands only in the failed bucket.
    #[test]
    fn bob_fails() {
        let mut roster = Roster::new();
        register(&mut roster, "Bob", "19", "4, 5").unwrap();

        let report = ClassReport::from_roster(&roster);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "Bob");
        assert_eq!(format!("{:.2}", report.failed[0].average), "4.50");
        assert!(report.approved.is_empty());
        assert!(report.recovery.is_empty());
    }

    /// T3.2: Empty roster reports zero and no best student.
    #[test]
    fn empty_roster_report() {
        let report = ClassReport::from_roster(&Roster::new());
        assert_eq!(format!("{:.2}", report.class_average), "0.00");
        assert!(report.best_student.is_none());
    }
}
