//! # Error Types
//!
//! Three layers of failure:
//! - [`ValidationError`] - the raw input was not a usable measurement.
//!   Recoverable: the user corrects the input and submits again.
//! - [`ClassificationError`] - a value fell through every classification rule.
//!   Unreachable for validated input; an internal-consistency signal.
//! - [`GiraffeError`] - umbrella used by the presentation layer.

use crate::stage::{FOOT_LENGTH_MAX, FOOT_LENGTH_MIN};
use thiserror::Error;

// =============================================================================
// VALIDATION
// =============================================================================

/// Failure produced by [`crate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// The trimmed input was empty, or did not parse to a finite number.
    #[error("Input is empty or not a number")]
    EmptyOrNonNumeric,

    /// The number parsed but lies outside the global foot-length bounds.
    #[error(
        "Foot length {value} cm is outside {} - {} cm",
        FOOT_LENGTH_MIN,
        FOOT_LENGTH_MAX
    )]
    OutOfBounds { value: f64 },
}

impl ValidationError {
    /// Stable machine-readable key for this failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyOrNonNumeric => "empty_or_non_numeric",
            ValidationError::OutOfBounds { .. } => "out_of_bounds",
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Failure produced by [`crate::classify_value`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClassificationError {
    /// No rule in the priority order matched the value.
    #[error("Foot length {value} cm is not mapped to any stage")]
    UnmappedValue { value: f64 },
}

impl ClassificationError {
    /// Stable machine-readable key for this failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ClassificationError::UnmappedValue { .. } => "unmapped_value",
        }
    }
}

// =============================================================================
// UMBRELLA
// =============================================================================

/// Errors surfaced to callers of the CLI and HTTP layers.
#[derive(Debug, Error)]
pub enum GiraffeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// A stage key did not name one of the four stages.
    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    /// Configuration could not be loaded or was invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl GiraffeError {
    /// Stable machine-readable key for this failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GiraffeError::Validation(e) => e.kind(),
            GiraffeError::Classification(e) => e.kind(),
            GiraffeError::UnknownStage(_) => "unknown_stage",
            GiraffeError::ConfigError(_) => "config_error",
            GiraffeError::IoError(_) => "io_error",
        }
    }

    /// True when the user can fix the failure by changing their input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GiraffeError::Validation(_) | GiraffeError::UnknownStage(_)
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
