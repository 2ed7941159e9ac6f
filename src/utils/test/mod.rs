//! Shared fixtures for unit and integration tests


pub use fixtures::{high_risk_record, low_risk_record, raw_record, sample_record, write_csv};
