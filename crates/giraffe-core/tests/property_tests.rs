//! # Property-Based Tests
//!
//! Totality, rejection and determinism invariants of validate/classify.

#![allow(clippy::unwrap_used, clippy::panic, clippy::float_arithmetic)]

use giraffe_core::{
    FOOT_LENGTH_MAX, FOOT_LENGTH_MIN, FootLength, StageId, ValidationError,
    classify, classify_value, validate,
};
use proptest::prelude::*;

// =============================================================================
// HELPERS
// =============================================================================

/// The stage rules written out as a plain `if` chain.
fn branch_chain(value: f64) -> Option<StageId> {
    if value >= 17.1 {
        Some(StageId::Adult)
    } else if (15.6..=19.2).contains(&value) {
        Some(StageId::Subadult)
    } else if (12.1..=16.5).contains(&value) {
        Some(StageId::Juvenile)
    } else if (8.9..=12.1).contains(&value) {
        Some(StageId::Newborn)
    } else {
        None
    }
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every in-bounds value maps to a stage.
    #[test]
    fn in_bounds_always_classifies(value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX) {
        let length = FootLength::new(value).unwrap();
        prop_assert!(classify(length).is_ok());
    }

    /// Values below the minimum are rejected as out of bounds.
    #[test]
    fn below_minimum_is_out_of_bounds(value in -1000.0f64..FOOT_LENGTH_MIN) {
        let raw = value.to_string();
        let out_of_bounds = matches!(validate(&raw), Err(ValidationError::OutOfBounds { .. }));
        prop_assert!(out_of_bounds, "{} was accepted", raw);
    }

    /// Values above the maximum are rejected as out of bounds.
    #[test]
    fn above_maximum_is_out_of_bounds(value in (FOOT_LENGTH_MAX + 1e-9)..1000.0f64) {
        let raw = value.to_string();
        prop_assert_eq!(
            validate(&raw),
            Err(ValidationError::OutOfBounds { value })
        );
    }

    /// Strings without digits never parse.
    #[test]
    fn alphabetic_input_is_non_numeric(raw in "[a-hj-mo-z ]{0,12}") {
        prop_assert_eq!(validate(&raw), Err(ValidationError::EmptyOrNonNumeric));
    }

    /// Classifying the same value twice gives the same stage.
    #[test]
    fn classification_is_idempotent(value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX) {
        let first = classify_value(value).map(|r| r.id);
        let second = classify_value(value).map(|r| r.id);
        prop_assert_eq!(first, second);
    }

    /// The chosen stage agrees with the oldest-first branch chain.
    #[test]
    fn oldest_matching_stage_wins(value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX) {
        prop_assert_eq!(classify_value(value).ok().map(|r| r.id), branch_chain(value));
    }

    /// Text after the leading number is ignored.
    #[test]
    fn trailing_text_is_ignored(
        value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX,
        suffix in "[a-df-z ,]{0,8}",
    ) {
        let raw = format!("{}{}", value, suffix);
        prop_assert_eq!(validate(&raw).map(FootLength::value), Ok(value));
    }

    /// The chosen stage's interval contains the value.
    #[test]
    fn result_interval_contains_value(value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX) {
        let record = classify_value(value).unwrap();
        prop_assert!(record.foot_length.contains(value));
    }

    /// Formatting then validating a value preserves it exactly.
    #[test]
    fn validated_value_is_unchanged(value in FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX) {
        let raw = value.to_string();
        prop_assert_eq!(validate(&raw).map(FootLength::value), Ok(value));
    }
}

// =============================================================================
// LITERAL SCENARIOS
// =============================================================================

#[test]
fn literal_boundary_scenarios() {
    let cases = [
        ("12.1", StageId::Juvenile),
        ("16.5", StageId::Subadult),
        ("15.6", StageId::Subadult),
        ("17.1", StageId::Adult),
        ("8.9", StageId::Newborn),
        ("24.8", StageId::Adult),
    ];

    for (raw, expected) in cases {
        let length = validate(raw).unwrap();
        assert_eq!(classify(length).unwrap().id, expected, "input {raw}");
    }
}

#[test]
fn literal_rejection_scenarios() {
    assert_eq!(
        validate("24.9"),
        Err(ValidationError::OutOfBounds { value: 24.9 })
    );
    assert_eq!(validate("abc"), Err(ValidationError::EmptyOrNonNumeric));
    assert_eq!(validate("abc12"), Err(ValidationError::EmptyOrNonNumeric));
}

#[test]
fn literal_unit_suffix_scenarios() {
    assert_eq!(classify(validate("12cm").unwrap()).unwrap().id, StageId::Newborn);
    assert_eq!(classify(validate("12 cm").unwrap()).unwrap().id, StageId::Newborn);
}
