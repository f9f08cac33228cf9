//! # Classifier
//!
//! Maps a foot length to exactly one stage.
//!
//! Stage intervals overlap, so the mapping is a first-match walk over
//! [`PRIORITY_ORDER`]: Adult, then Subadult, then Juvenile, then Newborn.
//! A shared boundary therefore always goes to the rule listed first:
//!
//! | Value | Also inside | Result |
//! |-------|-------------|--------|
//! | 12.1 | Newborn | Juvenile |
//! | 15.6 | Juvenile | Subadult |
//! | 16.5 | Juvenile | Subadult |
//! | 17.1 | Subadult | Adult |
//!
//! Do not replace the walk with a sorted-interval search; the overlap
//! resolution depends on this exact order.

use crate::error::{ClassificationError, GiraffeError};
use crate::stage::{StageId, StageRecord};
use crate::validate::{FootLength, validate};

// =============================================================================
// RULES
// =============================================================================

/// Test applied to a foot length by one rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guard {
    /// `value >= min`
    AtLeast(f64),
    /// `low <= value <= high`
    Within(f64, f64),
}

impl Guard {
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Guard::AtLeast(min) => value >= min,
            Guard::Within(low, high) => low <= value && value <= high,
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guard::AtLeast(min) => write!(f, "value >= {}", min),
            Guard::Within(low, high) => write!(f, "{} <= value <= {}", low, high),
        }
    }
}

/// One `(guard, stage)` pair in the priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub guard: Guard,
    pub stage: StageId,
}

/// Rules in evaluation order. First match wins.
///
/// Adult is one-sided: anything that reaches the classifier has already been
/// bounded above by validation.
pub static PRIORITY_ORDER: [Rule; 4] = [
    Rule {
        guard: Guard::AtLeast(17.1),
        stage: StageId::Adult,
    },
    Rule {
        guard: Guard::Within(15.6, 19.2),
        stage: StageId::Subadult,
    },
    Rule {
        guard: Guard::Within(12.1, 16.5),
        stage: StageId::Juvenile,
    },
    Rule {
        guard: Guard::Within(8.9, 12.1),
        stage: StageId::Newborn,
    },
];

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a validated foot length.
///
/// Every validated length maps to a stage; the error arm exists so an
/// inconsistency between the bounds and the rules is reported instead of
/// guessed around.
pub fn classify(length: FootLength) -> Result<&'static StageRecord, ClassificationError> {
    classify_value(length.value())
}

/// The rule that claims `value`, if any.
#[must_use]
pub fn matching_rule(value: f64) -> Option<&'static Rule> {
    PRIORITY_ORDER.iter().find(|rule| rule.guard.matches(value))
}

/// Walk [`PRIORITY_ORDER`] for a raw value.
///
/// Values that skipped validation can fall through every rule and produce
/// [`ClassificationError::UnmappedValue`].
pub fn classify_value(value: f64) -> Result<&'static StageRecord, ClassificationError> {
    matching_rule(value)
        .map(|rule| rule.stage.record())
        .ok_or(ClassificationError::UnmappedValue { value })
}

/// Validate then classify raw user input.
pub fn classify_input(raw: &str) -> Result<&'static StageRecord, GiraffeError> {
    let length = validate(raw)?;
    Ok(classify(length)?)
}

// =============================================================================
// TESTS
// =============================================================================
