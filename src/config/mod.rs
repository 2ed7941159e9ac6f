//! Configuration for the risk pipeline.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::util::safe_open_file;
use crate::error::{Error, Result};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Environment variable selecting the out-of-band policy (`reject` or `clamp`)
pub const OUT_OF_BAND_ENV: &str = "DIABETES_RISK_OUT_OF_BAND";

/// Environment variable overriding the Parquet batch size
pub const BATCH_SIZE_ENV: &str = "DIABETES_RISK_BATCH_SIZE";

/// What to do with a value outside every band of a band table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfBandPolicy {
    /// Raise an out-of-band error
    #[default]
    Reject,
    /// Assign the nearest outer band
    Clamp,
}

impl FromStr for OutOfBandPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            other => Err(Error::Config(format!(
                "unknown out-of-band policy '{other}', expected 'reject' or 'clamp'"
            ))),
        }
    }
}

/// Clinical thresholds for the binary risk indicators. Each indicator fires when
/// the value is strictly greater than its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub bmi: f64,
    pub blood_pressure: f64,
    pub glucose_level: f64,
    pub age: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            bmi: 30.0,
            blood_pressure: 140.0,
            glucose_level: 126.0,
            age: 45,
        }
    }
}

/// Configuration for the `RiskFeaturePipeline` and the batch tooling around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Handling of values outside the band tables
    pub out_of_band: OutOfBandPolicy,
    /// Indicator thresholds
    pub thresholds: RiskThresholds,
    /// Rows per record batch when reading Parquet
    pub batch_size: usize,
    /// Threads used for batch scoring
    pub worker_threads: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            out_of_band: OutOfBandPolicy::default(),
            thresholds: RiskThresholds::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            worker_threads: num_cpus::get(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "reading pipeline configuration")?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(policy) = std::env::var(OUT_OF_BAND_ENV) {
            self.out_of_band = policy.parse()?;
        }
        if let Ok(size) = std::env::var(BATCH_SIZE_ENV) {
            self.batch_size = size.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!("{BATCH_SIZE_ENV} must be a positive integer, got '{size}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be greater than zero".to_string()));
        }
        if self.worker_threads == 0 {
            return Err(Error::Config(
                "worker_threads must be greater than zero".to_string(),
            ));
        }
        let t = &self.thresholds;
        if !(t.bmi.is_finite() && t.blood_pressure.is_finite() && t.glucose_level.is_finite()) {
            return Err(Error::Config("risk thresholds must be finite".to_string()));
        }
        Ok(())
    }
}
