use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use diabetes_risk::loader::default_dataset_candidates;
use diabetes_risk::utils::logging::{create_main_progress_bar, create_spinner, finish_progress_bar};
use diabetes_risk::{
    DatasetSummary, PipelineConfig, RiskFeaturePipeline, ScoredRow, find_dataset,
    load_datasets_async, write_scores_parquet,
};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Score diabetes risk features for health datasets
#[derive(Debug, Parser)]
#[command(
    name = "diabetes-risk",
    version,
    about = "Band and score every row of CSV or Parquet health datasets",
    long_about = "Scores every row of each CSV or Parquet dataset (a directory is read as a set\n\
        of Parquet files). Without a dataset argument, data/diabetes_dataset.csv and\n\
        then diabetes_dataset.csv are tried. Row indices in the output run across all\n\
        datasets in argument order."
)]
struct Args {
    /// CSV or Parquet files, or directories of Parquet files
    datasets: Vec<PathBuf>,

    /// JSON pipeline configuration
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Write the scored rows to this Parquet file
    #[arg(long, value_name = "PARQUET")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => PipelineConfig::default(),
    }
    .with_env_overrides()
    .context("Invalid configuration override")?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
        .context("Failed to configure worker threads")?;

    let datasets = if args.datasets.is_empty() {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        vec![find_dataset(&default_dataset_candidates(&cwd))?]
    } else {
        args.datasets
    };

    let start = Instant::now();
    let spinner = create_spinner(Some(&format!("Loading {} dataset(s)", datasets.len())));
    let loaded = load_datasets_async(datasets, &config).await;
    spinner.finish_and_clear();
    let loaded = loaded?;
    let pipeline = RiskFeaturePipeline::new(config);

    let mut rows = Vec::new();
    for dataset in &loaded {
        let progress = create_main_progress_bar(
            dataset.len() as u64,
            Some(&format!("Scoring {}", dataset.source.display())),
        );
        let results = pipeline.score_batch_with_progress(&dataset.records, &progress);
        finish_progress_bar(&progress, Some("done"));

        let summary = DatasetSummary::from_results(dataset, &results)?;
        info!("{}:\n{summary}", dataset.source.display());

        let offset = rows.len();
        rows.extend(
            results
                .iter()
                .zip(&dataset.diagnoses)
                .enumerate()
                .map(|(i, (result, diagnosis))| {
                    ScoredRow::from_result(offset + i, result, *diagnosis)
                }),
        );
    }

    if let Some(out) = &args.out {
        write_scores_parquet(out, &rows)
            .with_context(|| format!("Failed to write scores to {}", out.display()))?;
    }

    info!(
        "Scored {} of {} rows from {} dataset(s) in {:?}",
        rows.iter().filter(|r| r.is_scored()).count(),
        rows.len(),
        loaded.len(),
        start.elapsed()
    );
    Ok(())
}
