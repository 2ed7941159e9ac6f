//! Arrow data handling utilities
//!
//! Helpers for pulling untyped cell values out of Arrow record batches.

pub mod array_utils;
pub mod extractors;

pub use array_utils::{downcast_array, find_column};
pub use extractors::extract_raw_column;
