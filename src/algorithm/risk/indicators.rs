//! Binary risk indicators
//!
//! Each indicator compares one field to a clinical threshold. The risk score
//! is the number of indicators that fire.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::config::RiskThresholds;
use crate::models::features::RiskScore;
use crate::models::record::HealthRecord;

/// Risk indicators contributing to the additive score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RiskIndicator {
    /// BMI above the obesity threshold
    HighBmi,
    /// Systolic blood pressure above the hypertension threshold
    HighBloodPressure,
    /// Glucose above the diabetic fasting threshold
    HighGlucose,
    /// Age above the screening threshold
    Age,
    /// Diabetes in the immediate family
    FamilyHistory,
}

impl RiskIndicator {
    /// All indicators in scoring order
    pub const ALL: [Self; 5] = [
        Self::HighBmi,
        Self::HighBloodPressure,
        Self::HighGlucose,
        Self::Age,
        Self::FamilyHistory,
    ];

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HighBmi => "BMI above threshold",
            Self::HighBloodPressure => "Blood pressure above threshold",
            Self::HighGlucose => "Glucose level above threshold",
            Self::Age => "Age above threshold",
            Self::FamilyHistory => "Family history of diabetes",
        }
    }

    /// Whether the indicator fires for a record
    #[must_use]
    pub fn fires(self, record: &HealthRecord, thresholds: &RiskThresholds) -> bool {
        match self {
            Self::HighBmi => record.bmi() > thresholds.bmi,
            Self::HighBloodPressure => record.blood_pressure() > thresholds.blood_pressure,
            Self::HighGlucose => record.glucose_level() > thresholds.glucose_level,
            Self::Age => record.age() > thresholds.age,
            // Taken as-is, not thresholded
            Self::FamilyHistory => record.family_history_diabetes(),
        }
    }

    /// 0/1 contribution to the score
    #[must_use]
    pub fn value(self, record: &HealthRecord, thresholds: &RiskThresholds) -> u8 {
        u8::from(self.fires(record, thresholds))
    }
}

impl fmt::Display for RiskIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Indicators that fire for a record, in scoring order
#[must_use]
pub fn fired_indicators(
    record: &HealthRecord,
    thresholds: &RiskThresholds,
) -> SmallVec<[RiskIndicator; 5]> {
    RiskIndicator::ALL
        .into_iter()
        .filter(|indicator| indicator.fires(record, thresholds))
        .collect()
}

/// Additive risk score for a record
#[must_use]
pub fn risk_score(record: &HealthRecord, thresholds: &RiskThresholds) -> RiskScore {
    RiskScore::from_indicators(&fired_indicators(record, thresholds))
}
