//! Input validation and normalization.
//!
//! Every function here is pure: it turns a raw scalar (text or number) into a
//! typed value or a [`ValidationError`] naming the offending field.

use crate::{Gender, ValidationError, ValidationKind, ValidationResult};
use chrono::NaiveDate;

/// Fixed date layout accepted and produced everywhere (`DD-MM-YYYY`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Anything a user might hand over as a number
///
/// Text is trimmed before parsing. Non-finite values never convert.
pub trait NumberLike {
    fn to_f64(&self) -> Option<f64>;
}

impl NumberLike for str {
    fn to_f64(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl NumberLike for String {
    fn to_f64(&self) -> Option<f64> {
        self.as_str().to_f64()
    }
}

impl<T: NumberLike> NumberLike for Option<T> {
    fn to_f64(&self) -> Option<f64> {
        self.as_ref().and_then(NumberLike::to_f64)
    }
}

impl<T: NumberLike + ?Sized> NumberLike for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

macro_rules! impl_number_like {
    ($($ty:ty),*) => {
        $(
            impl NumberLike for $ty {
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64).filter(|n| n.is_finite())
                }
            }
        )*
    };
}

impl_number_like!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

// ============================================================================
// Numbers
// ============================================================================

/// Convert a numeric-like value to `f64`
pub fn to_number<V: NumberLike>(value: V, field: &str) -> ValidationResult<f64> {
    value.to_f64().ok_or_else(|| {
        ValidationError::new(
            ValidationKind::InvalidNumber,
            field,
            format!("{} must be a valid number.", field),
        )
    })
}

/// Convert a numeric-like value and require it to be greater than zero
pub fn validate_positive<V: NumberLike>(value: V, field: &str) -> ValidationResult<f64> {
    let number = to_number(value, field)?;
    if number <= 0.0 {
        return Err(ValidationError::new(
            ValidationKind::NonPositiveValue,
            field,
            format!("{} must be greater than zero.", field),
        ));
    }
    Ok(number)
}

// ============================================================================
// Gender
// ============================================================================

/// Normalize (trim, lowercase) and check a gender tag
///
/// Empty and absent input are rejected like any other unknown value.
pub fn validate_gender<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult<Gender> {
    let normalized = value.into().unwrap_or_default().trim().to_lowercase();
    match normalized.as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        _ => Err(ValidationError::new(
            ValidationKind::InvalidGender,
            "gender",
            "gender must be 'male' or 'female'.",
        )),
    }
}

// ============================================================================
// Dates
// ============================================================================

/// Parse a date strictly in `DD-MM-YYYY` layout
pub fn parse_date<'a>(text: impl Into<Option<&'a str>>, field: &str) -> ValidationResult<NaiveDate> {
    let invalid = || {
        ValidationError::new(
            ValidationKind::InvalidDateFormat,
            field,
            format!("{} must be in DD-MM-YYYY format.", field),
        )
    };

    let text = text.into().ok_or_else(invalid)?;
    if !has_date_shape(text) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// `DD-MM-YYYY`: ten ASCII bytes, dashes at 2 and 5, digits elsewhere.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Format a date in the fixed `DD-MM-YYYY` layout
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Require `end` to fall strictly after `start`
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end <= start {
        return Err(ValidationError::new(
            ValidationKind::InvalidDateRange,
            "end_date",
            "end_date must be after start_date.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_number_accepts_numbers_and_text() {
        assert_eq!(to_number("5", "value").unwrap(), 5.0);
        assert_eq!(to_number(" 3.14 ", "value").unwrap(), 3.14);
        assert_eq!(to_number("-5", "value").unwrap(), -5.0);
        assert_eq!(to_number(2.5, "value").unwrap(), 2.5);
        assert_eq!(to_number(10, "value").unwrap(), 10.0);
        assert_eq!(to_number(0, "value").unwrap(), 0.0);
        assert_eq!(to_number(&String::from("1e2"), "value").unwrap(), 100.0);
    }

    #[test]
    fn test_to_number_rejects_garbage() {
        for bad in ["abc", "", "   ", "1,5", "NaN", "inf"] {
            let err = to_number(bad, "value").unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidNumber, "input {:?}", bad);
        }

        let err = to_number(None::<&str>, "start_weight").unwrap_err();
        assert_eq!(err.message, "start_weight must be a valid number.");
        assert!(to_number(f64::NAN, "value").is_err());
    }

    #[test]
    fn test_to_number_available_at_crate_root() {
        assert_eq!(crate::to_number("72.5", "start_weight").unwrap(), 72.5);
    }

    #[test]
    fn test_validate_positive_valid() {
        assert_eq!(validate_positive("10", "weight").unwrap(), 10.0);
        assert_eq!(validate_positive(3.5, "height").unwrap(), 3.5);
    }

    #[test]
    fn test_validate_positive_zero_or_negative() {
        let err = validate_positive(0, "start_weight").unwrap_err();
        assert_eq!(err.kind, ValidationKind::NonPositiveValue);
        assert_eq!(err.field, "start_weight");

        let err = validate_positive(-5, "height_cm").unwrap_err();
        assert_eq!(err.kind, ValidationKind::NonPositiveValue);
        assert!(err.message.contains("height_cm"));

        let err = validate_positive("x", "height_cm").unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidNumber);
    }

    #[test]
    fn test_validate_gender_valid() {
        assert_eq!(validate_gender("male").unwrap(), Gender::Male);
        assert_eq!(validate_gender("FEMALE").unwrap(), Gender::Female);
        assert_eq!(validate_gender("  Male ").unwrap(), Gender::Male);
    }

    #[test]
    fn test_validate_gender_invalid() {
        for bad in ["other", "", "m"] {
            let err = validate_gender(bad).unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidGender);
        }
        assert!(validate_gender(None::<&str>).is_err());
    }

    #[test]
    fn test_parse_date_valid() {
        let parsed = parse_date("01-02-2024", "start_date").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.month(), 2);
        assert_eq!(parsed.year(), 2024);
    }

    #[test]
    fn test_parse_date_invalid() {
        for bad in [
            "2024-02-01",
            "",
            "1-2-2024",
            "01/02/2024",
            "01-02-24",
            "31-02-2024",
            " 01-02-2024",
            "01-02-2024 ",
            "aa-bb-cccc",
        ] {
            let err = parse_date(bad, "start_date").unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidDateFormat, "input {:?}", bad);
            assert_eq!(err.message, "start_date must be in DD-MM-YYYY format.");
        }

        let err = parse_date(None::<&str>, "end_date").unwrap_err();
        assert_eq!(err.field, "end_date");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 15)), "15-03-2024");
        assert_eq!(parse_date(format_date(date(2024, 12, 31)).as_str(), "d").unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn test_validate_date_range_valid() {
        assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 10)).is_ok());
    }

    #[test]
    fn test_validate_date_range_invalid() {
        let start = date(2024, 1, 10);
        let end = date(2024, 1, 1);

        let err = validate_date_range(start, end).unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidDateRange);
        assert!(validate_date_range(start, start).is_err());
    }
}
