//! Shared numeric and date helpers.
//!
//! All rounding in the crate goes through [`round_to`], which rounds half away
//! from zero (`f64::round` on the scaled value).

use chrono::NaiveDate;

/// Decimal places for per-day weights, per-day BMI and the weight difference
pub const WEIGHT_DECIMALS: u32 = 2;

/// Decimal places for the summary daily change
pub const DAILY_CHANGE_DECIMALS: u32 = 4;

/// Round `value` to `decimals` places, half away from zero
///
/// Values too large to scale are returned unchanged; a negative zero comes
/// back as `0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor + 0.0
}

pub fn round2(value: f64) -> f64 {
    round_to(value, WEIGHT_DECIMALS)
}

pub fn round4(value: f64) -> f64 {
    round_to(value, DAILY_CHANGE_DECIMALS)
}

/// BMI = weight (kg) / height (m)^2, rounded to 2 decimals
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Whole days from `start` to `end` (negative when `end` is earlier)
pub fn whole_day_difference(end: NaiveDate, start: NaiveDate) -> i64 {
    (end - start).num_days()
}
