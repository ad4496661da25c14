//! Timeline engine for projecting weight and BMI day by day.
//!
//! The projection is a straight line between the start and end weight:
//! - Every calendar day from start to end (inclusive) gets one weight
//! - Each weight is rounded to 2 decimals, then turned into a BMI
//! - The summary difference and daily change are rounded once at the end

use crate::math::{bmi, round2, round4, whole_day_difference};
use crate::types::TimelineSeries;
use crate::validation::{validate_date_range, validate_positive};
use crate::{ValidationError, ValidationKind, ValidationResult, WeightChangeInput, WeightChangeResult};

/// Compute the weight/BMI timeline for a validated input
///
/// The scalar fields are validated again here, so an input assembled by hand
/// (bypassing [`RawInput::validate`](crate::RawInput::validate)) is still
/// rejected. Nothing is returned unless every check passes.
pub fn calculate(input: &WeightChangeInput) -> ValidationResult<WeightChangeResult> {
    let start_weight = validate_positive(input.start_weight, "start_weight")?;
    let end_weight = validate_positive(input.end_weight, "end_weight")?;
    let height_cm = validate_positive(input.height_cm, "height_cm")?;
    validate_date_range(input.start_date, input.end_date)?;

    let days = span_days(input)?;

    let weight_difference = end_weight - start_weight;
    let daily_change = weight_difference / f64::from(days);

    let (weights, bmis): (Vec<f64>, Vec<f64>) = (0..=days)
        .map(|day| {
            let weight = round2(start_weight + daily_change * f64::from(day));
            (weight, bmi(weight, height_cm))
        })
        .unzip();

    tracing::debug!(
        days,
        weight_difference,
        daily_change,
        "Projected weight timeline"
    );

    Ok(WeightChangeResult::new(
        input,
        TimelineSeries {
            days,
            weight_difference: round2(weight_difference),
            daily_change: round4(daily_change),
            weights,
            bmis,
        },
    ))
}

/// Whole days covered by the input; at least one
fn span_days(input: &WeightChangeInput) -> ValidationResult<u32> {
    let total = whole_day_difference(input.end_date, input.start_date);
    if total <= 0 {
        return Err(ValidationError::new(
            ValidationKind::ZeroOrNegativeDuration,
            "end_date",
            "date range must be at least 1 day.",
        ));
    }

    u32::try_from(total).map_err(|_| {
        ValidationError::new(
            ValidationKind::InvalidDateRange,
            "end_date",
            format!("date range of {} days is too long.", total),
        )
    })
}
