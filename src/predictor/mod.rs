//! Predictor seam
//!
//! A trained classifier lives outside this crate. Anything that maps a
//! [`FeatureVector`] to a binary label and a probability can plug in through
//! [`Predictor`]. [`ScorePredictor`] is a transparent baseline derived from the
//! additive risk score, used when no trained model is available.

use serde::Serialize;

use crate::algorithm::features::{FEATURE_COUNT, FeatureVector};
use crate::algorithm::risk::level::RiskLevel;
use crate::config::RiskThresholds;
use crate::error::{Error, Result};
use crate::models::features::RiskScore;

/// Output of a predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Predicted diagnosis
    pub label: bool,
    /// Probability of the positive class
    pub probability: f64,
}

impl Prediction {
    /// Create a prediction, checking the probability lies in `[0, 1]`
    pub fn new(label: bool, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::Prediction(format!(
                "probability {probability} is outside [0, 1]"
            )));
        }
        Ok(Self { label, probability })
    }

    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.probability)
    }
}

/// A trained (or stand-in) diabetes classifier
pub trait Predictor: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Predict from a fixed-order feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;

    /// Predict from a plain slice, checking its length first
    fn predict_slice(&self, values: &[f64]) -> Result<Prediction> {
        let values: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
            Error::Prediction(format!(
                "expected {FEATURE_COUNT} features, got {}",
                values.len()
            ))
        })?;
        self.predict(&FeatureVector::from_values(values))
    }
}

/// Baseline predictor: probability is the fraction of risk indicators that fire
///
/// It re-derives the indicators from the raw measurements in the feature
/// vector, so it needs no access to the original record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePredictor {
    /// Probability at or above which the label is positive
    pub decision_threshold: f64,
    pub thresholds: RiskThresholds,
}

impl Default for ScorePredictor {
    fn default() -> Self {
        Self {
            decision_threshold: 0.5,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl ScorePredictor {
    /// Probability for a known score
    #[must_use]
    pub fn probability_for(score: RiskScore) -> f64 {
        f64::from(score.value()) / f64::from(RiskScore::MAX)
    }

    /// Predict directly from a score
    pub fn predict_score(&self, score: RiskScore) -> Result<Prediction> {
        let probability = Self::probability_for(score);
        Prediction::new(probability >= self.decision_threshold, probability)
    }
}

impl Predictor for ScorePredictor {
    fn name(&self) -> &str {
        "risk-score baseline"
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let value = |name: &str| {
            features
                .get(name)
                .ok_or_else(|| Error::Prediction(format!("feature '{name}' missing")))
        };

        // The family-history flag is not part of the model vector, so the
        // probability is the fired share of the four indicators it can see.
        let t = &self.thresholds;
        let fired = [
            value("BMI")? > t.bmi,
            value("Blood_Pressure")? > t.blood_pressure,
            value("Glucose_Level")? > t.glucose_level,
            value("Age")? > f64::from(t.age),
        ];
        let probability = fired.iter().filter(|f| **f).count() as f64 / fired.len() as f64;
        Prediction::new(probability >= self.decision_threshold, probability)
    }
}
