//! Derived risk features
//!
//! Band labels for BMI, blood pressure and age, the additive risk score, and
//! the [`RiskFeatures`] value that bundles them for one record.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::algorithm::risk::indicators::RiskIndicator;

/// BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Systolic blood pressure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BloodPressureBand {
    Normal,
    Prehypertension,
    #[serde(rename = "Stage 1")]
    Stage1,
    #[serde(rename = "Stage 2")]
    Stage2,
}

impl BloodPressureBand {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Prehypertension => "Prehypertension",
            Self::Stage1 => "Stage 1",
            Self::Stage2 => "Stage 2",
        }
    }
}

impl fmt::Display for BloodPressureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Age group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeBand {
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Adult,
    #[serde(rename = "Middle Age")]
    MiddleAge,
    Senior,
    Elderly,
}

impl AgeBand {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::YoungAdult => "Young Adult",
            Self::Adult => "Adult",
            Self::MiddleAge => "Middle Age",
            Self::Senior => "Senior",
            Self::Elderly => "Elderly",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sum of the binary risk indicators, always in `0..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Highest possible score
    pub const MAX: u8 = 5;

    /// Count fired indicators. Saturates at [`RiskScore::MAX`].
    #[must_use]
    pub fn from_indicators(fired: &[RiskIndicator]) -> Self {
        let count = u8::try_from(fired.len()).unwrap_or(Self::MAX);
        Self(count.min(Self::MAX))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Derived features for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFeatures {
    pub bmi_band: BmiBand,
    pub blood_pressure_band: BloodPressureBand,
    pub age_band: AgeBand,
    pub risk_score: RiskScore,
    /// Indicators that contributed to the score
    pub indicators: SmallVec<[RiskIndicator; 5]>,
}

impl RiskFeatures {
    /// Whether a given indicator fired
    #[must_use]
    pub fn has(&self, indicator: RiskIndicator) -> bool {
        self.indicators.contains(&indicator)
    }
}
