//! # Presentation
//!
//! The only place user-facing wording lives. The core returns records and
//! failure kinds; this module turns them into text.

use giraffe_core::{
    ClassificationError, FOOT_LENGTH_MAX, FOOT_LENGTH_MIN, GiraffeError, Measurement, StageRecord,
    ValidationError,
};

/// Message for input that is empty or not a number.
pub const MSG_NOT_A_NUMBER: &str = "Oops! Please enter a number for the foot length.";

/// Message for an unclassifiable length (internal inconsistency).
pub const MSG_UNMAPPED: &str = "Could not determine a giraffe stage for this length. \
     Please try a value between 8.9cm and 24.8cm.";

/// Headline of the stage card.
#[must_use]
pub fn headline(record: &StageRecord) -> String {
    format!("You're like a {} Giraffe!", record.display_name)
}

/// Sub-headline tying the stage to a child's age.
#[must_use]
pub fn age_line(record: &StageRecord) -> String {
    format!(
        "Children around {} typically have this foot size",
        record.child_age_range
    )
}

/// `"4.3 - 6 meters (14 - 20 feet)"`
#[must_use]
pub fn measurement(m: &Measurement) -> String {
    format!("{} ({})", m.metric, m.imperial)
}

/// Message shown for a validation failure.
#[must_use]
pub fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::EmptyOrNonNumeric => MSG_NOT_A_NUMBER.to_string(),
        ValidationError::OutOfBounds { .. } => format!(
            "Hmm, that seems like a very tiny or very big foot for this ruler! \
             Please check the measurement ({}cm to {}cm) and try again.",
            FOOT_LENGTH_MIN, FOOT_LENGTH_MAX
        ),
    }
}

/// Message shown for any failure a user can hit.
#[must_use]
pub fn error_message(err: &GiraffeError) -> String {
    match err {
        GiraffeError::Validation(e) => validation_message(e),
        GiraffeError::Classification(ClassificationError::UnmappedValue { .. }) => {
            MSG_UNMAPPED.to_string()
        }
        other => other.to_string(),
    }
}

/// Full multi-line stage card for terminal output.
#[must_use]
pub fn stage_card(record: &StageRecord) -> String {
    let mut out = String::new();
    out.push_str(&headline(record));
    out.push('\n');
    out.push_str(&age_line(record));
    out.push_str("\n\n");
    out.push_str(&format!("Stage:        {}\n", record.display_name));
    out.push_str(&format!("Giraffe age:  {}\n", record.giraffe_age_range));
    out.push_str(&format!("Foot length:  {}\n", record.foot_length));
    out.push_str(&format!("Height:       {}\n", measurement(&record.height)));
    out.push_str(&format!("Weight:       {}\n", measurement(&record.weight)));
    out.push_str(&format!("Image:        {}\n", record.image_url));
    out.push_str("\nFun facts:\n");
    for fact in record.fun_facts {
        out.push_str(&format!("  * {}\n", fact));
    }
    out
}

/// One summary line per stage, for listings.
#[must_use]
pub fn stage_summary(record: &StageRecord) -> String {
    format!(
        "{:<10} {:<14} {:<16} children {}",
        record.id.key(),
        record.display_name,
        record.foot_length.to_string(),
        record.child_age_range
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use giraffe_core::StageId;

    #[test]
    fn headline_uses_display_name() {
        assert_eq!(
            headline(StageId::Newborn.record()),
            "You're like a Newborn/Calf Giraffe!"
        );
    }

    #[test]
    fn age_line_uses_child_range() {
        assert_eq!(
            age_line(StageId::Juvenile.record()),
            "Children around 1 - 4 years typically have this foot size"
        );
    }

    #[test]
    fn measurement_shows_both_units() {
        assert_eq!(
            measurement(&StageId::Adult.record().height),
            "4.3 - 6 meters (14 - 20 feet)"
        );
    }

    #[test]
    fn out_of_bounds_message_mentions_range() {
        let msg = validation_message(&ValidationError::OutOfBounds { value: 30.0 });
        assert!(msg.contains("(8.9cm to 24.8cm)"));
    }

    #[test]
    fn error_message_maps_each_kind() {
        assert_eq!(
            error_message(&ValidationError::EmptyOrNonNumeric.into()),
            MSG_NOT_A_NUMBER
        );
        assert_eq!(
            error_message(&ClassificationError::UnmappedValue { value: 1.0 }.into()),
            MSG_UNMAPPED
        );
        assert_eq!(
            error_message(&GiraffeError::UnknownStage("calf".into())),
            "Unknown stage: calf"
        );
    }

    #[test]
    fn card_lists_every_fact() {
        let record = StageId::Subadult.record();
        let card = stage_card(record);
        assert!(card.starts_with("You're like a Subadult Giraffe!"));
        assert!(card.contains("Foot length:  15.6 - 19.2 cm"));
        for fact in record.fun_facts {
            assert!(card.contains(fact));
        }
    }

    #[test]
    fn summary_starts_with_key() {
        assert!(stage_summary(StageId::Adult.record()).starts_with("adult"));
    }
}
