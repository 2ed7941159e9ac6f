//! Utilities for working with Arrow arrays.

use arrow::array::{Array, ArrayRef};
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};

/// Downcast a column to a specific array type with clear error messages
///
/// # Arguments
///
/// * `array` - The array reference to downcast
/// * `column_name` - The name of the column (for error messages)
/// * `expected_type_name` - A human-readable name of the expected type (for error messages)
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        Error::validation(
            column_name,
            format!(
                "column has type {:?}, expected {expected_type_name}",
                array.data_type()
            ),
        )
    })
}

/// Get a column from a record batch by name, or `None` if it is absent
#[must_use]
pub fn find_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Option<&'a ArrayRef> {
    batch
        .schema()
        .index_of(column_name)
        .ok()
        .map(|idx| batch.column(idx))
}
