//! Flat per-row scoring output for export

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::features::RiskFeatures;

/// One dataset row after scoring. Rejected rows keep their position and carry
/// the rejection reason instead of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRow {
    /// Zero-based row index in the source dataset
    pub row: u64,
    pub bmi_band: Option<String>,
    pub blood_pressure_band: Option<String>,
    pub age_band: Option<String>,
    pub risk_score: Option<u8>,
    /// Known diagnosis, if the dataset carries one
    pub diagnosis: Option<bool>,
    pub error: Option<String>,
}

impl ScoredRow {
    #[must_use]
    pub fn from_result(row: usize, result: &Result<RiskFeatures>, diagnosis: Option<bool>) -> Self {
        let row = row as u64;
        match result {
            Ok(features) => Self {
                row,
                bmi_band: Some(features.bmi_band.to_string()),
                blood_pressure_band: Some(features.blood_pressure_band.to_string()),
                age_band: Some(features.age_band.to_string()),
                risk_score: Some(features.risk_score.value()),
                diagnosis,
                error: None,
            },
            Err(e) => Self::rejected(row, e, diagnosis),
        }
    }

    fn rejected(row: u64, error: &Error, diagnosis: Option<bool>) -> Self {
        Self {
            row,
            bmi_band: None,
            blood_pressure_band: None,
            age_band: None,
            risk_score: None,
            diagnosis,
            error: Some(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.risk_score.is_some()
    }
}
