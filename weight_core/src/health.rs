//! Presentation policy shared by the front ends.
//!
//! These bands and thresholds do not feed back into the calculation; they only
//! decide how a result is labelled:
//! - BMI bands: underweight, normal, overweight, obese
//! - Pace warnings when the daily change is faster than recommended

use serde::{Deserialize, Serialize};

/// Lower bound of the normal BMI band
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Lower bound of the overweight BMI band
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese BMI band
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Fixed BMI banding
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < BMI_OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Daily change limits (kg/day) beyond which a pace warning is shown
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaceThresholds {
    #[serde(default = "default_rapid_loss")]
    pub rapid_loss_kg_per_day: f64,

    #[serde(default = "default_rapid_gain")]
    pub rapid_gain_kg_per_day: f64,
}

impl Default for PaceThresholds {
    fn default() -> Self {
        Self {
            rapid_loss_kg_per_day: default_rapid_loss(),
            rapid_gain_kg_per_day: default_rapid_gain(),
        }
    }
}

fn default_rapid_loss() -> f64 {
    -0.15
}

fn default_rapid_gain() -> f64 {
    0.10
}

/// How loudly a pace warning should be shown
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Danger,
}

/// Planned change is faster than commonly recommended
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaceWarning {
    RapidLoss,
    RapidGain,
}

impl PaceWarning {
    /// Check a daily change against the thresholds (strict comparisons)
    pub fn assess(daily_change: f64, thresholds: &PaceThresholds) -> Option<Self> {
        if daily_change < thresholds.rapid_loss_kg_per_day {
            Some(PaceWarning::RapidLoss)
        } else if daily_change > thresholds.rapid_gain_kg_per_day {
            Some(PaceWarning::RapidGain)
        } else {
            None
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PaceWarning::RapidLoss => Severity::Danger,
            PaceWarning::RapidGain => Severity::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PaceWarning::RapidLoss => {
                "Your average weight loss rate appears higher than commonly recommended.\n\
                 Rapid weight loss may affect muscle mass and metabolic health."
            }
            PaceWarning::RapidGain => {
                "Your average weight gain rate appears higher than commonly recommended.\n\
                 Rapid weight gain may increase fat accumulation."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_band_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(42.0).label(), "Obese");
    }

    #[test]
    fn test_pace_warning_thresholds() {
        let thresholds = PaceThresholds::default();

        assert_eq!(PaceWarning::assess(-0.15, &thresholds), None);
        assert_eq!(PaceWarning::assess(-0.1613, &thresholds), Some(PaceWarning::RapidLoss));
        assert_eq!(PaceWarning::assess(0.10, &thresholds), None);
        assert_eq!(PaceWarning::assess(0.5, &thresholds), Some(PaceWarning::RapidGain));
        assert_eq!(PaceWarning::assess(0.0, &thresholds), None);
    }

    #[test]
    fn test_pace_warning_severity_and_message() {
        assert_eq!(PaceWarning::RapidLoss.severity(), Severity::Danger);
        assert_eq!(PaceWarning::RapidGain.severity(), Severity::Warning);
        assert!(PaceWarning::RapidLoss.message().contains("muscle mass"));
        assert!(PaceWarning::RapidGain.message().contains("fat accumulation"));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = PaceThresholds {
            rapid_loss_kg_per_day: -0.2,
            rapid_gain_kg_per_day: 0.6,
        };
        assert_eq!(PaceWarning::assess(-0.1613, &thresholds), None);
        assert_eq!(PaceWarning::assess(0.5, &thresholds), None);
    }
}
