//! Parquet file operations
//!
//! Reading dataset files into Arrow record batches and writing scored rows
//! back out.

use std::fs::File;
use std::path::{Path, PathBuf};

use arrow_schema::FieldRef;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{Error, Result};
use crate::models::scored::ScoredRow;
use crate::utils::logging::{DatasetOp, log_operation_complete, log_operation_start, log_warning};

/// Read a parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
/// * `batch_size` - Rows per record batch
pub fn read_parquet(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start(DatasetOp::ReadParquet, path);

    let file = safe_open_file(path, "reading parquet dataset")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(batch_size.max(1))
        .build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();

    log_operation_complete(DatasetOp::ReadParquet, path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Find all Parquet files in a directory, sorted by file name
pub fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_directory(dir, "searching for parquet files")?;

    let parquet_files = std::fs::read_dir(dir)
        .map_err(|e| Error::io_error_with_source("Failed to read directory", e).with_path(dir))?
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => {
                let path = entry.path();
                (path.is_file() && path.extension().is_some_and(|ext| ext == "parquet"))
                    .then_some(Ok(path))
            }
            Err(e) => Some(Err(Error::io_error_with_source(
                "Failed to read directory entry",
                e,
            )
            .with_path(dir))),
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if parquet_files.is_empty() {
        log_warning("No Parquet files found in directory", Some(dir));
    }

    Ok(parquet_files)
}

/// Load all parquet files from a directory in parallel
///
/// Batches keep file order so row indices stay stable between runs.
pub fn load_parquet_files_parallel(dir: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let parquet_files = find_parquet_files(dir)?;
    if parquet_files.is_empty() {
        return Ok(Vec::new());
    }

    let per_file: Vec<Result<Vec<RecordBatch>>> = parquet_files
        .par_iter()
        .map(|path| read_parquet(path, batch_size))
        .collect();

    let mut combined = Vec::new();
    for batches in per_file {
        combined.extend(batches?);
    }

    log::info!(
        "Loaded {} batches from {} Parquet files in {}",
        combined.len(),
        parquet_files.len(),
        dir.display()
    );
    Ok(combined)
}

/// Convert scored rows into a single record batch
pub fn scores_to_record_batch(rows: &[ScoredRow]) -> Result<RecordBatch> {
    let fields = Vec::<FieldRef>::from_type::<ScoredRow>(TracingOptions::default())
        .map_err(|e| Error::Serialization(format!("Schema generation error: {e}")))?;

    serde_arrow::to_record_batch(&fields, &rows)
        .map_err(|e| Error::Serialization(format!("Serialization error: {e}")))
}

/// Write scored rows to a Parquet file, replacing any existing file
pub fn write_scores_parquet(path: &Path, rows: &[ScoredRow]) -> Result<()> {
    log_operation_start(DatasetOp::WriteScores, path);

    let batch = scores_to_record_batch(rows)?;
    let file = File::create(path)
        .map_err(|e| Error::io_error_with_source("Failed to create output file", e).with_path(path))?;

    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    log_operation_complete(DatasetOp::WriteScores, path, rows.len(), None);
    Ok(())
}
