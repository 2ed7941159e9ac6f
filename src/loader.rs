//! Dataset loading
//!
//! Reads CSV or Parquet health datasets into untyped [`RawHealthRecord`]s with
//! the optional `Diabetes_Diagnosis` label alongside. Cells are not validated
//! here: a bad value surfaces as an error for its own row when it is scored.

use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::util::{safe_open_file, try_operations};
use crate::error::{Error, Result};
use crate::models::raw::{RawHealthRecord, RawValue, columns};
use crate::utils::arrow::extract_raw_column;
use crate::utils::io::{load_parquet_files_parallel, read_parquet};
use crate::utils::logging::{DatasetOp, log_operation_complete, log_operation_start, log_warning};

/// File name looked up when no dataset path is given
pub const DEFAULT_DATASET_FILE: &str = "diabetes_dataset.csv";

/// Rows of a health dataset in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// File or directory the rows came from
    pub source: PathBuf,
    /// Column names as found in the file
    pub columns: Vec<String>,
    pub records: Vec<RawHealthRecord>,
    /// Known diagnosis per row, parallel to `records`
    pub diagnoses: Vec<Option<bool>>,
}

impl Dataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records paired with their diagnosis
    pub fn labeled(&self) -> impl Iterator<Item = (&RawHealthRecord, Option<bool>)> + '_ {
        self.records.iter().zip(self.diagnoses.iter().copied())
    }

    /// Whether the file carries a diagnosis column
    #[must_use]
    pub fn has_diagnosis(&self) -> bool {
        self.columns.iter().any(|c| c == columns::DIABETES_DIAGNOSIS)
    }

    /// Input columns absent from the file header
    #[must_use]
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::INPUT_COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.columns.iter().any(|c| c == name))
            .collect()
    }

    fn push(&mut self, record: RawHealthRecord, diagnosis: Option<bool>) {
        self.records.push(record);
        self.diagnoses.push(diagnosis);
    }
}

/// Interpret a diagnosis cell. Unreadable labels are logged and treated as unknown.
fn parse_diagnosis(row: usize, value: Option<RawValue>) -> Option<bool> {
    let value = value?;
    match value.as_flag(columns::DIABETES_DIAGNOSIS) {
        Ok(flag) => Some(flag),
        Err(e) => {
            warn!("Row {row}: ignoring diagnosis label: {e}");
            None
        }
    }
}

fn log_unknown_columns(source: &Path, header: &[String]) {
    let unknown: Vec<&str> = header
        .iter()
        .map(String::as_str)
        .filter(|c| !columns::INPUT_COLUMNS.contains(c) && *c != columns::DIABETES_DIAGNOSIS)
        .collect();
    if !unknown.is_empty() {
        debug!("Ignoring columns {unknown:?} in {}", source.display());
    }
}

/// Load a CSV dataset with a header row
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let start = Instant::now();
    log_operation_start(DatasetOp::ReadCsv, path);

    let file = safe_open_file(path, "reading CSV dataset")?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let header: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    log_unknown_columns(path, &header);

    let mut dataset = Dataset {
        source: path.to_path_buf(),
        columns: header.clone(),
        ..Dataset::default()
    };

    // Cells are decoded lossily so a malformed row fails validation on its own
    // when scored. Only I/O failures abort the read.
    for (row, result) in reader.byte_records().enumerate() {
        let cells = match result {
            Ok(cells) => cells,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Row {row}: unreadable CSV record kept empty: {e}");
                csv::ByteRecord::new()
            }
        };
        let mut record = RawHealthRecord::default();
        let mut diagnosis = None;

        for (column, cell) in header.iter().zip(cells.iter()) {
            let cell = String::from_utf8_lossy(cell);
            if column == columns::DIABETES_DIAGNOSIS {
                diagnosis = parse_diagnosis(row, RawValue::infer(&cell));
            } else {
                record.set(column, RawValue::infer(&cell));
            }
        }
        dataset.push(record, diagnosis);
    }

    log_operation_complete(DatasetOp::ReadCsv, path, dataset.len(), Some(start.elapsed()));
    Ok(dataset)
}

/// Build a dataset from Arrow record batches, in batch order
pub fn dataset_from_batches(source: &Path, batches: &[RecordBatch]) -> Result<Dataset> {
    let header: Vec<String> = batches
        .first()
        .map(|b| b.schema().fields().iter().map(|f| f.name().clone()).collect())
        .unwrap_or_default();
    log_unknown_columns(source, &header);

    let mut dataset = Dataset {
        source: source.to_path_buf(),
        columns: header,
        ..Dataset::default()
    };

    for batch in batches {
        let offset = dataset.len();
        let mut records = vec![RawHealthRecord::default(); batch.num_rows()];

        for column in columns::INPUT_COLUMNS {
            if let Some(values) = extract_raw_column(batch, column)? {
                for (record, value) in records.iter_mut().zip(values) {
                    record.set(column, value);
                }
            }
        }

        let diagnoses = match extract_raw_column(batch, columns::DIABETES_DIAGNOSIS)? {
            Some(values) => values
                .into_iter()
                .enumerate()
                .map(|(i, v)| parse_diagnosis(offset + i, v))
                .collect(),
            None => vec![None; batch.num_rows()],
        };

        dataset.records.extend(records);
        dataset.diagnoses.extend(diagnoses);
    }

    Ok(dataset)
}

/// Load a Parquet file, or every Parquet file in a directory
pub fn load_parquet(path: &Path, batch_size: usize) -> Result<Dataset> {
    let batches = if path.is_dir() {
        load_parquet_files_parallel(path, batch_size)?
    } else {
        read_parquet(path, batch_size)?
    };
    dataset_from_batches(path, &batches)
}

/// Load a dataset, choosing the reader from the path
///
/// Directories are read as a set of Parquet files; files dispatch on their
/// `.csv` or `.parquet` extension.
pub fn load_dataset(path: &Path, config: &PipelineConfig) -> Result<Dataset> {
    if path.is_dir() {
        return load_parquet(path, config.batch_size);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let dataset = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("parquet") => load_parquet(path, config.batch_size)?,
        _ => {
            return Err(Error::io_error(
                "Unsupported dataset format, expected .csv or .parquet",
            )
            .with_path(path));
        }
    };

    let missing = dataset.missing_columns();
    if !missing.is_empty() {
        log_warning(
            &format!("Dataset has no column(s) {missing:?}"),
            Some(path),
        );
    }

    Ok(dataset)
}

/// Conventional dataset locations relative to `root`, in lookup order
#[must_use]
pub fn default_dataset_candidates(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join("data").join(DEFAULT_DATASET_FILE),
        root.join(DEFAULT_DATASET_FILE),
    ]
}

/// First candidate path that exists
pub fn find_dataset(candidates: &[PathBuf]) -> Result<PathBuf> {
    let operations = candidates
        .iter()
        .map(|candidate| {
            move || {
                if candidate.exists() {
                    Ok(candidate.clone())
                } else {
                    Err(Error::io_error("Dataset not found").with_path(candidate))
                }
            }
        })
        .collect();

    try_operations("locating dataset", operations)
}
