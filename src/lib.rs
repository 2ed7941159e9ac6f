//! Diabetes risk features for tabular health records: clinical band labels
//! for BMI, blood pressure and age, an additive 0 to 5 risk score, and the
//! batch tooling to score CSV or Parquet datasets.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod predictor;
pub mod utils;

// Core types
pub use config::{OutOfBandPolicy, PipelineConfig, RiskThresholds};
pub use error::{Error, Result};
pub use models::{
    AgeBand, Assessment, BloodPressureBand, BmiBand, HealthRecord, RawHealthRecord, RawValue,
    RiskFeatures, RiskScore, ScoredRow,
};

// Scoring
pub use algorithm::features::{FEATURE_COLUMNS, FeatureVector};
pub use algorithm::recommendations::{Recommendation, recommendations};
pub use algorithm::risk::RiskFeaturePipeline;
pub use algorithm::risk::bands::{BandTable, classify};
pub use algorithm::risk::indicators::RiskIndicator;
pub use algorithm::risk::level::RiskLevel;
pub use algorithm::statistics::DatasetSummary;
pub use predictor::{Prediction, Predictor, ScorePredictor};

// Dataset IO
pub use async_io::load_datasets_async;
pub use loader::{Dataset, find_dataset, load_csv, load_dataset, load_parquet};
pub use utils::io::write_scores_parquet;
