//! # Input Validation
//!
//! Turns raw user text into a [`FootLength`] the classifier can trust.
//!
//! Parsing reads the longest leading decimal number and ignores whatever
//! follows, so `"12cm"` and `"12 cm"` both read as `12`. Input that does not
//! start with a number (`"abc12"`) is rejected.

use crate::error::ValidationError;
use crate::stage::{FOOT_LENGTH_MAX, FOOT_LENGTH_MIN};
use serde::Serialize;

/// A foot length (cm) known to lie within `[FOOT_LENGTH_MIN, FOOT_LENGTH_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FootLength(f64);

impl FootLength {
    /// Bounds-check an already numeric value.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::EmptyOrNonNumeric);
        }
        if !(FOOT_LENGTH_MIN..=FOOT_LENGTH_MAX).contains(&value) {
            return Err(ValidationError::OutOfBounds { value });
        }
        Ok(Self(value))
    }

    /// The measurement in centimeters, exactly as parsed.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for FootLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cm", self.0)
    }
}

/// Validate a raw, user-supplied measurement.
///
/// # Errors
///
/// - [`ValidationError::EmptyOrNonNumeric`] when the trimmed input is empty or
///   does not start with a finite number.
/// - [`ValidationError::OutOfBounds`] when the number is below 8.9 or above 24.8.
pub fn validate(raw: &str) -> Result<FootLength, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyOrNonNumeric);
    }

    let value: f64 = leading_number(trimmed)
        .ok_or(ValidationError::EmptyOrNonNumeric)?
        .parse()
        .map_err(|_| ValidationError::EmptyOrNonNumeric)?;

    FootLength::new(value)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
///
/// At least one mantissa digit is required. An exponent marker without
/// digits after it is not part of the number.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&s[..end])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(validate("8.9").map(FootLength::value), Ok(8.9));
        assert_eq!(validate("24.8").map(FootLength::value), Ok(24.8));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(validate("  15.6\n").map(FootLength::value), Ok(15.6));
    }

    #[test]
    fn value_is_not_rounded() {
        assert_eq!(validate("12.123456").map(FootLength::value), Ok(12.123456));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate(""), Err(ValidationError::EmptyOrNonNumeric));
        assert_eq!(validate("   \t"), Err(ValidationError::EmptyOrNonNumeric));
    }

    #[test]
    fn reads_leading_number() {
        let cases = [
            ("12cm", 12.0),
            ("12 cm", 12.0),
            ("16.5.3", 16.5),
            ("1.2e1x", 12.0),
            ("15e", 15.0),
            ("+9.", 9.0),
        ];
        for (raw, expected) in cases {
            assert_eq!(validate(raw).map(FootLength::value), Ok(expected), "input {raw:?}");
        }
    }

    #[test]
    fn leading_number_ignores_trailing_text() {
        assert_eq!(
            validate("1,5"),
            Err(ValidationError::OutOfBounds { value: 1.0 })
        );
        assert_eq!(
            validate("30 centimeters"),
            Err(ValidationError::OutOfBounds { value: 30.0 })
        );
    }

    #[test]
    fn rejects_non_numeric() {
        for raw in ["abc", "abc12", "cm12", ".", "-", "--3", "+.e5", "NaN", "inf", "-infinity"] {
            assert_eq!(
                validate(raw),
                Err(ValidationError::EmptyOrNonNumeric),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_bounds() {
        assert_eq!(
            validate("24.9"),
            Err(ValidationError::OutOfBounds { value: 24.9 })
        );
        assert_eq!(
            validate("8.8"),
            Err(ValidationError::OutOfBounds { value: 8.8 })
        );
        assert_eq!(
            validate("-10"),
            Err(ValidationError::OutOfBounds { value: -10.0 })
        );
    }

    #[test]
    fn foot_length_new_rejects_nan() {
        assert_eq!(
            FootLength::new(f64::NAN),
            Err(ValidationError::EmptyOrNonNumeric)
        );
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(
            validate("17.1").map(|l| l.to_string()).ok(),
            Some("17.1 cm".to_string())
        );
    }
}
