//! Risk scoring algorithms
//!
//! - `risk`: banding, indicators and the [`risk::RiskFeaturePipeline`]
//! - `features`: the model feature vector
//! - `recommendations`: rule-based health advice
//! - `statistics`: dataset-level summaries of a scoring run

pub mod features;
pub mod recommendations;
pub mod risk;
pub mod statistics;
