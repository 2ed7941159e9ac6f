//! Utility functions and helpers
//!
//! - `arrow`: type-tolerant column extraction from record batches
//! - `io`: Parquet reading and writing
//! - `logging`: operation logging and progress bars
//! - `test`: fixtures shared by unit and integration tests

pub mod arrow;
pub mod io;
pub mod logging;
pub mod test;

pub use io::{find_parquet_files, load_parquet_files_parallel, read_parquet, write_scores_parquet};
pub use logging::{DatasetOp, log_operation_complete, log_operation_start, log_warning};
