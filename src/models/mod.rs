//! Domain models for health records and derived risk features
//!
//! Raw (untyped) input, the validated [`HealthRecord`], categorical encodings,
//! and the outputs the pipeline produces.

pub mod assessment;
pub mod categorical;
pub mod features;
pub mod raw;
pub mod record;
pub mod scored;

pub use assessment::Assessment;
pub use categorical::{Gender, SmokingStatus, StressLevel};
pub use features::{AgeBand, BloodPressureBand, BmiBand, RiskFeatures, RiskScore};
pub use raw::{RawHealthRecord, RawValue};
pub use record::{HealthRecord, HealthRecordBuilder};
pub use scored::ScoredRow;
