//! Async dataset loading
//!
//! Loads several datasets concurrently. File reading and decoding are
//! blocking work, so each load runs on tokio's blocking pool while the stream
//! bounds how many run at once.

use std::path::PathBuf;

use futures::stream::{self, StreamExt};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::loader::{Dataset, load_dataset};

/// Load every path concurrently, returning datasets in input order
///
/// Fails with the first error encountered once all loads have finished.
pub async fn load_datasets_async(
    paths: Vec<PathBuf>,
    config: &PipelineConfig,
) -> Result<Vec<Dataset>> {
    let total = paths.len();
    log::info!("Loading {total} datasets asynchronously");

    let mut results = stream::iter(paths.into_iter().enumerate())
        .map(|(idx, path)| {
            let config = config.clone();
            async move {
                let loaded = tokio::task::spawn_blocking(move || load_dataset(&path, &config))
                    .await
                    .map_err(|e| Error::other(format!("Task join error: {e}")))
                    .and_then(|r| r);
                (idx, loaded)
            }
        })
        .buffer_unordered(num_cpus::get())
        .collect::<Vec<_>>()
        .await;

    results.sort_by_key(|(idx, _)| *idx);

    let datasets = results
        .into_iter()
        .map(|(_, loaded)| {
            loaded.inspect_err(|e| log::error!("Error loading dataset: {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Loaded {} records from {total} datasets",
        datasets.iter().map(Dataset::len).sum::<usize>()
    );
    Ok(datasets)
}
