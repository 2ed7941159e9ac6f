//! Risk level derived from a predicted probability

use std::fmt;

use serde::Serialize;

/// Coarse risk level shown alongside a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Very High Risk")]
    VeryHigh,
}

impl RiskLevel {
    /// Map a probability in `[0, 1]` to a level. Cut points are 0.2, 0.4 and 0.6,
    /// each inclusive on the upper level.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.2 {
            Self::Low
        } else if probability < 0.4 {
            Self::Moderate
        } else if probability < 0.6 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
