//! Utility functions for error handling
//!
//! This module provides utility functions to make file access errors more informative.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::io_error(format!("File not found, needed for: {purpose}")).with_path(path));
    }

    if !path.is_file() {
        return Err(
            Error::io_error(format!("Path is not a file, expected a file for: {purpose}"))
                .with_path(path),
        );
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };

            Err(Error::io_error_with_source(context, e).with_path(path))
        }
    }
}

/// Check if a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(
            Error::io_error(format!("Directory not found, needed for: {purpose}")).with_path(path),
        );
    }

    if !path.is_dir() {
        return Err(Error::io_error(format!(
            "Path is not a directory, expected a directory for: {purpose}"
        ))
        .with_path(path));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(Error::io_error_with_source(
            format!("Failed to access directory for: {purpose}"),
            e,
        )
        .with_path(path)),
    }
}

/// Try multiple operations in sequence, returning the first success or all errors
///
/// # Example
/// ```
/// use diabetes_risk::error::util::try_operations;
/// use diabetes_risk::error::{Error, Result};
///
/// let value: Result<u32> = try_operations(
///     "picking a value",
///     vec![
///         Box::new(|| Err(Error::other("first failed"))) as Box<dyn FnOnce() -> Result<u32>>,
///         Box::new(|| Ok(7)),
///     ],
/// );
/// assert_eq!(value.unwrap(), 7);
/// ```
pub fn try_operations<T, F>(operation_name: &str, operations: Vec<F>) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let mut errors = Vec::new();

    for (i, operation) in operations.into_iter().enumerate() {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e) => errors.push((i, e)),
        }
    }

    let error_details = errors
        .into_iter()
        .map(|(i, e)| format!("Attempt {}: {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(Error::other(format!(
        "All attempts failed for operation: {operation_name}\n{error_details}"
    )))
}
