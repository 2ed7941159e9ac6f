//! Model feature vector
//!
//! Assembles the fixed-order numeric vector a trained predictor consumes:
//! raw measurements, categorical codes, two interaction terms and the
//! ordinal risk bands. Absent optional fields encode as 0.

use serde::Serialize;

use crate::algorithm::risk::bands::{
    AGE_BANDS, MODEL_BLOOD_PRESSURE_BANDS, MODEL_BMI_BANDS, MODEL_GLUCOSE_BANDS,
};
use crate::config::OutOfBandPolicy;
use crate::error::Result;
use crate::models::record::HealthRecord;

/// Feature names in vector order
pub const FEATURE_COLUMNS: [&str; 15] = [
    "Age",
    "Gender",
    "BMI",
    "Blood_Pressure",
    "Glucose_Level",
    "Exercise_Hours_Per_Week",
    "Smoking_Status",
    "Alcohol_Consumption_Per_Week",
    "Stress_Level",
    "Age_BMI",
    "BMI_Glucose",
    "Age_Risk",
    "BMI_Risk",
    "BP_Risk",
    "Glucose_Risk",
];

/// Number of features a predictor receives
pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// Fixed-order numeric features for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build the vector for a validated record
    pub fn from_record(record: &HealthRecord, policy: OutOfBandPolicy) -> Result<Self> {
        let age = f64::from(record.age());
        let bmi = record.bmi();
        let glucose = record.glucose_level();

        let age_risk = AGE_BANDS.band_index(age, policy)?;
        let bmi_risk = MODEL_BMI_BANDS.classify(bmi, policy)?;
        let bp_risk = MODEL_BLOOD_PRESSURE_BANDS.classify(record.blood_pressure(), policy)?;
        let glucose_risk = MODEL_GLUCOSE_BANDS.classify(glucose, policy)?;

        Ok(Self([
            age,
            record.gender().map_or(0.0, |g| f64::from(g.code())),
            bmi,
            record.blood_pressure(),
            glucose,
            record.exercise_hours_per_week(),
            record.smoking_status().map_or(0.0, |s| f64::from(s.code())),
            record.alcohol_consumption_per_week().unwrap_or(0.0),
            record.stress_level().map_or(0.0, |s| f64::from(s.code())),
            age * bmi,
            bmi * glucose,
            age_risk as f64,
            f64::from(bmi_risk),
            f64::from(bp_risk),
            f64::from(glucose_risk),
        ]))
    }

    /// Wrap an already assembled vector
    #[must_use]
    pub const fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Value of a named feature
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|idx| self.0[idx])
    }

    /// Pairs of (feature name, value) in vector order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }
}
