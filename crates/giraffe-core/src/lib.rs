//! # giraffe-core
//!
//! Foot-length classifier for the giraffe growth stage widget - THE LOGIC.
//!
//! A raw measurement goes through two pure functions:
//!
//! ```text
//! "16.5" ──validate──▶ FootLength(16.5) ──classify──▶ &StageRecord (Subadult)
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no I/O, no logging: callers decide what to show and record
//! - The stage table is `static` and immutable
//! - Overlapping intervals are resolved by [`PRIORITY_ORDER`] alone

// =============================================================================
// MODULES
// =============================================================================

pub mod classify;
pub mod error;
pub mod stage;
pub mod validate;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use classify::{
    Guard, PRIORITY_ORDER, Rule, classify, classify_input, classify_value, matching_rule,
};
pub use error::{ClassificationError, GiraffeError, ValidationError};
pub use stage::{
    FOOT_LENGTH_MAX, FOOT_LENGTH_MIN, FootInterval, Measurement, StageId, StageRecord, stage_table,
};
pub use validate::{FootLength, validate};
