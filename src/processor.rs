use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, instrument};

use crate::models::Dataset;
use crate::source_parser::parse_content;

/// Default number of files processed at the same time
pub const DEFAULT_WORKERS: usize = 4;

/// Records extracted from one input file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub records: Dataset,
}

/// Reads one file and runs it through the content parser
///
/// A file that cannot be read is logged and yields an empty dataset.
///
/// # Arguments
/// * `path` - File to process
///
/// # Returns
/// * `Dataset` - All extracted records, duplicates included
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn process_file(path: &Path) -> Dataset {
    let content = match read_content(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Error processing {}: {:#}", path.display(), e);
            return Dataset::new();
        }
    };

    info!("Processing file {}", path.display());
    let outcome = parse_content(&content);
    let strategies: Vec<String> = outcome.strategies().iter().map(|s| s.to_string()).collect();
    let records = outcome.into_records();
    info!(
        "Extracted {} records from {} ({})",
        records.len(),
        path.display(),
        strategies.join("+")
    );
    records
}

fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Processes several files in parallel with bounded concurrency
///
/// Each file is parsed on a blocking task; at most `workers` run at once.
/// Results are returned in completion order, so callers that care about a
/// particular file should look it up by path. A task that panics is logged and
/// left out without affecting the others.
///
/// # Arguments
/// * `paths` - Files to process
/// * `workers` - Maximum number of files parsed simultaneously
///
/// # Returns
/// * `Result<Vec<FileReport>>` - One report per file that completed
pub async fn process_files_parallel(paths: &[PathBuf], workers: usize) -> Result<Vec<FileReport>> {
    run_parallel(paths, workers, process_file).await
}

/// Runs `process` on every path with at most `workers` blocking tasks at once
pub(crate) async fn run_parallel(
    paths: &[PathBuf],
    workers: usize,
    process: fn(&Path) -> Dataset,
) -> Result<Vec<FileReport>> {
    let workers = workers.max(1);
    debug!("Processing {} files with {} workers", paths.len(), workers);

    let semaphore = Arc::new(Semaphore::new(workers));
    let mut tasks = FuturesUnordered::new();

    for path in paths {
        let path = path.clone();
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("Worker pool semaphore closed")?;

        let task_path = path.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            process(&task_path)
        });
        tasks.push(async move { (path, handle.await) });
    }

    let mut reports = Vec::with_capacity(paths.len());
    while let Some((path, joined)) = tasks.next().await {
        match joined {
            Ok(records) => reports.push(FileReport { path, records }),
            Err(e) => error!("Task for {} did not complete: {}", path.display(), e),
        }
    }

    info!("Finished processing {} of {} files", reports.len(), paths.len());
    Ok(reports)
}

/// Finds the report for `path`, or an empty dataset if that file did not complete
pub fn records_for(reports: &[FileReport], path: &Path) -> Dataset {
    reports
        .iter()
        .find(|report| report.path == path)
        .map(|report| report.records.clone())
        .unwrap_or_default()
}
