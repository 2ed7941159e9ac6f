//! Dataset-level summary of a scoring run

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::loader::Dataset;
use crate::models::features::{AgeBand, BloodPressureBand, BmiBand, RiskFeatures, RiskScore};
use crate::models::raw::{RawHealthRecord, columns};

const SCORE_BUCKETS: usize = RiskScore::MAX as usize + 1;

/// Counts and rates over one scored dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub scored: usize,
    pub rejected: usize,
    pub validation_errors: usize,
    pub out_of_band_errors: usize,
    /// Share of labelled rows with a positive diagnosis
    pub diagnosis_rate: Option<f64>,
    pub mean_age: Option<f64>,
    pub mean_bmi: Option<f64>,
    /// Scored rows per risk score `0..=5`
    pub score_histogram: [usize; SCORE_BUCKETS],
    /// Positive diagnosis share per risk score, where labels exist
    pub diagnosis_rate_by_score: [Option<f64>; SCORE_BUCKETS],
    pub bmi_bands: FxHashMap<BmiBand, usize>,
    pub blood_pressure_bands: FxHashMap<BloodPressureBand, usize>,
    pub age_bands: FxHashMap<AgeBand, usize>,
    /// Rows with no value per input column
    pub missing_values: FxHashMap<&'static str, usize>,
}

#[derive(Default)]
struct RateCounter {
    labelled: usize,
    positive: usize,
}

impl RateCounter {
    fn add(&mut self, diagnosis: Option<bool>) {
        if let Some(positive) = diagnosis {
            self.labelled += 1;
            self.positive += usize::from(positive);
        }
    }

    fn rate(&self) -> Option<f64> {
        (self.labelled > 0).then(|| self.positive as f64 / self.labelled as f64)
    }
}

fn numeric(record: &RawHealthRecord, column: &str) -> Option<f64> {
    record.get(column).and_then(|v| v.as_number(column).ok())
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

impl DatasetSummary {
    /// Summarise `results`, which must hold one entry per dataset row
    pub fn from_results(dataset: &Dataset, results: &[Result<RiskFeatures>]) -> Result<Self> {
        if results.len() != dataset.len() {
            return Err(Error::other(format!(
                "{} scoring results for {} dataset rows",
                results.len(),
                dataset.len()
            )));
        }

        let mut summary = Self {
            generated_at: Utc::now(),
            total: dataset.len(),
            scored: 0,
            rejected: 0,
            validation_errors: 0,
            out_of_band_errors: 0,
            diagnosis_rate: None,
            mean_age: None,
            mean_bmi: None,
            score_histogram: [0; SCORE_BUCKETS],
            diagnosis_rate_by_score: [None; SCORE_BUCKETS],
            bmi_bands: FxHashMap::default(),
            blood_pressure_bands: FxHashMap::default(),
            age_bands: FxHashMap::default(),
            missing_values: FxHashMap::default(),
        };

        let mut overall = RateCounter::default();
        let mut by_score: [RateCounter; SCORE_BUCKETS] = Default::default();
        let (mut age_sum, mut bmi_sum) = (0.0, 0.0);

        for ((record, diagnosis), result) in dataset.labeled().zip(results) {
            overall.add(diagnosis);

            for column in columns::INPUT_COLUMNS {
                if record.get(column).is_none() {
                    *summary.missing_values.entry(column).or_default() += 1;
                }
            }

            match result {
                Ok(features) => {
                    summary.scored += 1;
                    let score = usize::from(features.risk_score.value());
                    summary.score_histogram[score] += 1;
                    by_score[score].add(diagnosis);

                    *summary.bmi_bands.entry(features.bmi_band).or_default() += 1;
                    *summary
                        .blood_pressure_bands
                        .entry(features.blood_pressure_band)
                        .or_default() += 1;
                    *summary.age_bands.entry(features.age_band).or_default() += 1;

                    age_sum += numeric(record, columns::AGE).unwrap_or_default();
                    bmi_sum += numeric(record, columns::BMI).unwrap_or_default();
                }
                Err(Error::OutOfBand { .. }) => {
                    summary.rejected += 1;
                    summary.out_of_band_errors += 1;
                }
                Err(Error::Validation { .. }) => {
                    summary.rejected += 1;
                    summary.validation_errors += 1;
                }
                Err(_) => summary.rejected += 1,
            }
        }

        summary.diagnosis_rate = overall.rate();
        summary.diagnosis_rate_by_score = std::array::from_fn(|i| by_score[i].rate());
        summary.mean_age = mean(age_sum, summary.scored);
        summary.mean_bmi = mean(bmi_sum, summary.scored);
        Ok(summary)
    }

    /// Share of rows that produced features
    #[must_use]
    pub fn scored_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.scored as f64 / self.total as f64
        }
    }
}

fn write_counts<K: Ord + Hash + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    counts: &FxHashMap<K, usize>,
) -> fmt::Result {
    let line = counts
        .iter()
        .sorted_by_key(|(k, _)| *k)
        .map(|(k, n)| format!("{k}={n}"))
        .join(", ");
    writeln!(f, "  {title}: {line}")
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.precision$}"))
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scored {} of {} records ({} rejected: {} validation, {} out of band)",
            self.scored, self.total, self.rejected, self.validation_errors, self.out_of_band_errors
        )?;
        writeln!(
            f,
            "  Mean age {}, mean BMI {}, diagnosis rate {}",
            fmt_opt(self.mean_age, 1),
            fmt_opt(self.mean_bmi, 1),
            fmt_opt(self.diagnosis_rate, 3)
        )?;

        let histogram = self
            .score_histogram
            .iter()
            .zip(&self.diagnosis_rate_by_score)
            .enumerate()
            .map(|(score, (n, rate))| format!("{score}: {n} (dx {})", fmt_opt(*rate, 2)))
            .join(", ");
        writeln!(f, "  Risk scores: {histogram}")?;

        write_counts(f, "BMI bands", &self.bmi_bands)?;
        write_counts(f, "Blood pressure bands", &self.blood_pressure_bands)?;
        write_counts(f, "Age bands", &self.age_bands)?;

        let missing = columns::INPUT_COLUMNS
            .iter()
            .filter_map(|c| self.missing_values.get(c).map(|n| format!("{c}={n}")))
            .join(", ");
        if missing.is_empty() {
            write!(f, "  No missing values")
        } else {
            write!(f, "  Missing values: {missing}")
        }
    }
}
