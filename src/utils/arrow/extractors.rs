//! Field extraction utilities for Arrow record batches
//!
//! Dataset files are not consistent about column types: the same measurement
//! may be stored as float, integer or text, and indicators as boolean or 0/1.
//! Extraction therefore yields untyped [`RawValue`]s and leaves validation to
//! the record layer.

use arrow::array::{Array, BooleanArray, Float64Array, LargeStringArray, StringArray};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};
use crate::models::raw::RawValue;
use crate::utils::arrow::array_utils::{downcast_array, find_column};

/// Extract every value of a column as untyped cells
///
/// # Returns
///
/// * `Ok(Some(values))` - One entry per row, `None` for nulls and empty strings
/// * `Ok(None)` - If the column is not present
/// * `Err` - If the column has a type that cannot hold a health measurement
pub fn extract_raw_column(
    batch: &RecordBatch,
    column_name: &str,
) -> Result<Option<Vec<Option<RawValue>>>> {
    let Some(array) = find_column(batch, column_name) else {
        return Ok(None);
    };

    let values = match array.data_type() {
        DataType::Null => vec![None; array.len()],
        DataType::Boolean => {
            let bools = downcast_array::<BooleanArray>(array, column_name, "Boolean")?;
            (0..bools.len())
                .map(|i| (!bools.is_null(i)).then(|| RawValue::Bool(bools.value(i))))
                .collect()
        }
        DataType::Utf8 => {
            let strings = downcast_array::<StringArray>(array, column_name, "Utf8")?;
            (0..strings.len())
                .map(|i| {
                    if strings.is_null(i) {
                        None
                    } else {
                        RawValue::infer(strings.value(i))
                    }
                })
                .collect()
        }
        DataType::LargeUtf8 => {
            let strings = downcast_array::<LargeStringArray>(array, column_name, "LargeUtf8")?;
            (0..strings.len())
                .map(|i| {
                    if strings.is_null(i) {
                        None
                    } else {
                        RawValue::infer(strings.value(i))
                    }
                })
                .collect()
        }
        dt if dt.is_numeric() => {
            let converted = cast(array, &DataType::Float64)?;
            let floats = downcast_array::<Float64Array>(&converted, column_name, "Float64")?;
            (0..floats.len())
                .map(|i| (!floats.is_null(i)).then(|| RawValue::Number(floats.value(i))))
                .collect()
        }
        other => {
            return Err(Error::validation(
                column_name,
                format!("unsupported column type {other:?}"),
            ));
        }
    };

    Ok(Some(values))
}
