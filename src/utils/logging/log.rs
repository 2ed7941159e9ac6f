//! Log lines for dataset reads and score exports

use std::fmt;
use std::path::Path;
use std::time::Duration;

/// File operation the pipeline reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOp {
    ReadCsv,
    ReadParquet,
    WriteScores,
}

impl DatasetOp {
    const fn verb(self) -> &'static str {
        match self {
            Self::ReadCsv | Self::ReadParquet => "Read",
            Self::WriteScores => "Wrote",
        }
    }

    const fn preposition(self) -> &'static str {
        match self {
            Self::ReadCsv | Self::ReadParquet => "from",
            Self::WriteScores => "to",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::ReadCsv | Self::ReadParquet => "health records",
            Self::WriteScores => "scored rows",
        }
    }
}

impl fmt::Display for DatasetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadCsv => "Reading CSV dataset",
            Self::ReadParquet => "Reading Parquet dataset",
            Self::WriteScores => "Writing scores",
        })
    }
}

fn completion_message(op: DatasetOp, path: &Path, rows: usize, elapsed: Option<Duration>) -> String {
    let base = format!(
        "{} {rows} {} {} {}",
        op.verb(),
        op.noun(),
        op.preposition(),
        path.display()
    );
    match elapsed {
        Some(duration) if duration.as_secs_f64() > 0.0 => format!(
            "{base} in {duration:?} ({:.0} rows/s)",
            rows as f64 / duration.as_secs_f64()
        ),
        Some(duration) => format!("{base} in {duration:?}"),
        None => base,
    }
}

pub fn log_operation_start(op: DatasetOp, path: &Path) {
    log::info!("{op} {}", path.display());
}

/// Log the row count of a finished read or export, with throughput when timed
pub fn log_operation_complete(op: DatasetOp, path: &Path, rows: usize, elapsed: Option<Duration>) {
    log::info!("{}", completion_message(op, path, rows, elapsed));
}

/// Log a dataset problem that does not stop the run
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{}: {message}", path.display()),
        None => log::warn!("{message}"),
    }
}
