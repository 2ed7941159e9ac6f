//! Full assessment of one record

use serde::Serialize;

use crate::algorithm::recommendations::Recommendation;
use crate::algorithm::risk::level::RiskLevel;
use crate::models::features::RiskFeatures;
use crate::predictor::Prediction;

/// Derived features, predictor output and advice for one person
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: RiskFeatures,
    pub prediction: Prediction,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
}
