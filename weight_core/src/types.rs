//! Core domain types for the weight change planner.
//!
//! This module defines:
//! - The gender tag carried through a calculation
//! - The validated input and its raw (text) counterpart
//! - The immutable calculation result and its derived trend
//! - Timeline entries for per-day rendering

use crate::validation;
use crate::ValidationResult;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Gender tag. Carried through the calculation, never used by it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_gender(s)
    }
}

// ============================================================================
// Input Types
// ============================================================================

/// Validated calculation input
#[derive(Clone, Debug, PartialEq)]
pub struct WeightChangeInput {
    pub start_weight: f64,
    pub end_weight: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Input fields exactly as a user typed them
#[derive(Clone, Debug, Default)]
pub struct RawInput {
    pub start_weight: String,
    pub end_weight: String,
    pub height_cm: String,
    pub gender: String,
    pub start_date: String,
    pub end_date: String,
}

impl RawInput {
    /// Validate every field and build a [`WeightChangeInput`]
    ///
    /// Fields are checked in entry order; the first failure is returned.
    pub fn validate(&self) -> ValidationResult<WeightChangeInput> {
        let start_weight = validation::validate_positive(self.start_weight.as_str(), "start_weight")?;
        let end_weight = validation::validate_positive(self.end_weight.as_str(), "end_weight")?;
        let height_cm = validation::validate_positive(self.height_cm.as_str(), "height_cm")?;
        let gender = validation::validate_gender(self.gender.as_str())?;
        let start_date = validation::parse_date(self.start_date.as_str(), "start_date")?;
        let end_date = validation::parse_date(self.end_date.as_str(), "end_date")?;
        validation::validate_date_range(start_date, end_date)?;

        Ok(WeightChangeInput {
            start_weight,
            end_weight,
            height_cm,
            gender,
            start_date,
            end_date,
        })
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Overall direction of the planned change
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Loss,
    Gain,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Loss => "Weight loss",
            Trend::Gain => "Weight gain",
            Trend::Stable => "Weight stable",
        }
    }
}

/// Immutable output of a single calculation
///
/// Fields are private: a result is only ever produced by
/// [`calculate`](crate::engine::calculate), which guarantees that `weights`
/// and `bmis` both hold exactly `days + 1` entries.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightChangeResult {
    start_weight: f64,
    end_weight: f64,
    height_cm: f64,
    gender: Gender,
    #[serde(serialize_with = "serialize_date")]
    start_date: NaiveDate,
    #[serde(serialize_with = "serialize_date")]
    end_date: NaiveDate,
    days: u32,
    weight_difference: f64,
    daily_change: f64,
    weights: Vec<f64>,
    bmis: Vec<f64>,
    bmi_start: f64,
    bmi_end: f64,
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&validation::format_date(*date))
}

/// Per-day values assembled by the engine
pub(crate) struct TimelineSeries {
    pub days: u32,
    pub weight_difference: f64,
    pub daily_change: f64,
    pub weights: Vec<f64>,
    pub bmis: Vec<f64>,
}

impl WeightChangeResult {
    pub(crate) fn new(input: &WeightChangeInput, series: TimelineSeries) -> Self {
        debug_assert_eq!(series.weights.len(), series.days as usize + 1);
        debug_assert_eq!(series.bmis.len(), series.weights.len());

        let bmi_start = series.bmis.first().copied().unwrap_or_default();
        let bmi_end = series.bmis.last().copied().unwrap_or_default();

        Self {
            start_weight: input.start_weight,
            end_weight: input.end_weight,
            height_cm: input.height_cm,
            gender: input.gender,
            start_date: input.start_date,
            end_date: input.end_date,
            days: series.days,
            weight_difference: series.weight_difference,
            daily_change: series.daily_change,
            weights: series.weights,
            bmis: series.bmis,
            bmi_start,
            bmi_end,
        }
    }

    pub fn start_weight(&self) -> f64 {
        self.start_weight
    }

    pub fn end_weight(&self) -> f64 {
        self.end_weight
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whole days between the start and end date
    pub fn days(&self) -> u32 {
        self.days
    }

    /// `end_weight - start_weight`, rounded to 2 decimals
    pub fn weight_difference(&self) -> f64 {
        self.weight_difference
    }

    /// Per-day weight delta, rounded to 4 decimals
    pub fn daily_change(&self) -> f64 {
        self.daily_change
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bmis(&self) -> &[f64] {
        &self.bmis
    }

    pub fn bmi_start(&self) -> f64 {
        self.bmi_start
    }

    pub fn bmi_end(&self) -> f64 {
        self.bmi_end
    }

    pub fn is_weight_loss(&self) -> bool {
        self.weight_difference < 0.0
    }

    pub fn is_weight_gain(&self) -> bool {
        self.weight_difference > 0.0
    }

    /// Exact comparison; the difference is already rounded to 2 decimals.
    pub fn is_weight_stable(&self) -> bool {
        self.weight_difference == 0.0
    }

    pub fn trend(&self) -> Trend {
        if self.is_weight_loss() {
            Trend::Loss
        } else if self.is_weight_gain() {
            Trend::Gain
        } else {
            Trend::Stable
        }
    }

    /// Iterate the timeline day by day, start date first
    pub fn timeline(&self) -> impl Iterator<Item = TimelineEntry> + '_ {
        self.weights
            .iter()
            .zip(&self.bmis)
            .enumerate()
            .map(move |(day, (&weight, &bmi))| TimelineEntry {
                day: day as u32,
                date: self
                    .start_date
                    .checked_add_days(Days::new(day as u64))
                    .unwrap_or(self.end_date),
                weight,
                bmi,
            })
    }
}

/// One calendar day of the projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub day: u32,
    pub date: NaiveDate,
    pub weight: f64,
    pub bmi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: &str, end: &str, height: &str, gender: &str, from: &str, to: &str) -> RawInput {
        RawInput {
            start_weight: start.into(),
            end_weight: end.into(),
            height_cm: height.into(),
            gender: gender.into(),
            start_date: from.into(),
            end_date: to.into(),
        }
    }

    #[test]
    fn test_gender_round_trips_through_text() {
        assert_eq!("  Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_raw_input_validates_into_typed_input() {
        let input = raw("80", "75.5", "170", "FEMALE", "01-01-2024", "01-02-2024")
            .validate()
            .unwrap();

        assert_eq!(input.start_weight, 80.0);
        assert_eq!(input.end_weight, 75.5);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(input.end_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_raw_input_reports_first_bad_field() {
        let err = raw("80", "abc", "-1", "x", "bad", "bad").validate().unwrap_err();
        assert_eq!(err.field, "end_weight");
        assert_eq!(err.kind, crate::ValidationKind::InvalidNumber);

        let err = raw("80", "75", "170", "male", "10-01-2024", "01-01-2024")
            .validate()
            .unwrap_err();
        assert_eq!(err.kind, crate::ValidationKind::InvalidDateRange);
    }

    #[test]
    fn test_trend_labels() {
        assert_eq!(Trend::Loss.label(), "Weight loss");
        assert_eq!(Trend::Gain.label(), "Weight gain");
        assert_eq!(Trend::Stable.label(), "Weight stable");
    }
}
