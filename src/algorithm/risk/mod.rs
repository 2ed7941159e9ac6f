//! Risk feature pipeline
//!
//! Turns a health record into band labels for BMI, blood pressure and age and
//! an additive risk score in `0..=5`. Every record is scored independently;
//! the pipeline holds configuration only and no mutable state.

pub mod bands;
pub mod indicators;
pub mod level;

use indicatif::{ParallelProgressIterator, ProgressBar};
use log::debug;
use rayon::prelude::*;

use crate::algorithm::features::FeatureVector;
use crate::algorithm::recommendations::recommendations;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::features::{RiskFeatures, RiskScore};
use crate::models::raw::RawHealthRecord;
use crate::models::record::HealthRecord;
use crate::predictor::Predictor;

use bands::{AGE_BANDS, BLOOD_PRESSURE_BANDS, BMI_BANDS};
use indicators::fired_indicators;

/// Converts health records into [`RiskFeatures`]
#[derive(Debug, Clone, Default)]
pub struct RiskFeaturePipeline {
    config: PipelineConfig,
}

impl RiskFeaturePipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Band and score a validated record
    pub fn score(&self, record: &HealthRecord) -> Result<RiskFeatures> {
        let policy = self.config.out_of_band;

        let bmi_band = BMI_BANDS.classify(record.bmi(), policy)?;
        let blood_pressure_band = BLOOD_PRESSURE_BANDS.classify(record.blood_pressure(), policy)?;
        let age_band = AGE_BANDS.classify(f64::from(record.age()), policy)?;

        let indicators = fired_indicators(record, &self.config.thresholds);
        let risk_score = RiskScore::from_indicators(&indicators);

        Ok(RiskFeatures {
            bmi_band,
            blood_pressure_band,
            age_band,
            risk_score,
            indicators,
        })
    }

    /// Validate then score an untyped record
    pub fn score_raw(&self, raw: &RawHealthRecord) -> Result<RiskFeatures> {
        let record = HealthRecord::try_from(raw)?;
        self.score(&record)
    }

    /// Score many records in parallel. Output order matches input order and a
    /// failing record yields an `Err` in its own slot only.
    #[must_use]
    pub fn score_batch(&self, records: &[RawHealthRecord]) -> Vec<Result<RiskFeatures>> {
        records
            .par_iter()
            .enumerate()
            .map(|(idx, raw)| self.score_logged(idx, raw))
            .collect()
    }

    /// [`RiskFeaturePipeline::score_batch`] advancing a progress bar per record
    #[must_use]
    pub fn score_batch_with_progress(
        &self,
        records: &[RawHealthRecord],
        progress: &ProgressBar,
    ) -> Vec<Result<RiskFeatures>> {
        records
            .par_iter()
            .enumerate()
            .progress_with(progress.clone())
            .map(|(idx, raw)| self.score_logged(idx, raw))
            .collect()
    }

    fn score_logged(&self, idx: usize, raw: &RawHealthRecord) -> Result<RiskFeatures> {
        let result = self.score_raw(raw);
        if let Err(e) = &result {
            debug!("Record {idx} not scored: {e}");
        }
        result
    }

    /// Score a record, run the predictor and attach a risk level and recommendations
    pub fn assess(&self, record: &HealthRecord, predictor: &dyn Predictor) -> Result<Assessment> {
        let features = self.score(record)?;
        let vector = FeatureVector::from_record(record, self.config.out_of_band)?;
        let prediction = predictor.predict(&vector)?;
        debug!(
            "{} predicted probability {:.3} (score {})",
            predictor.name(),
            prediction.probability,
            features.risk_score
        );

        Ok(Assessment {
            risk_level: prediction.risk_level(),
            features,
            prediction,
            recommendations: recommendations(record),
        })
    }
}
