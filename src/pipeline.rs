use anyhow::Result;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::output::{build_site, save_base58, save_json, save_text};
use crate::processor::{process_files_parallel, records_for};
use crate::reconcile::{compare_and_filter, merge, remove_duplicates};
use crate::report::{print_data_details, RunSummary};

/// Runs the full reconciliation between the source listing and the baseline
///
/// This function performs the following steps:
/// 1. Parses both input files on the worker pool
/// 2. Deduplicates each dataset by URL
/// 3. Keeps the source records whose URL is absent from the baseline
/// 4. Writes the new-only records as text and as a site document
/// 5. Writes baseline + new records as a site document and as base-58 text
///
/// Unreadable inputs count as empty and failed writes are logged; neither
/// stops the run.
///
/// # Arguments
/// * `config` - File locations and tuning for this run
///
/// # Returns
/// * `Result<RunSummary>` - Counts for the final report
#[instrument(level = "info", skip_all)]
pub async fn run(config: &AppConfig) -> Result<RunSummary> {
    let limit = config.display_limit;
    let source_name = config.source_file.display().to_string();
    let baseline_name = config.baseline_file.display().to_string();

    info!("Processing input files");
    let paths = vec![config.source_file.clone(), config.baseline_file.clone()];
    let reports = process_files_parallel(&paths, config.workers).await?;
    let source_records = records_for(&reports, &config.source_file);
    let baseline_records = records_for(&reports, &config.baseline_file);
    info!("Source records: {}, baseline records: {}", source_records.len(), baseline_records.len());

    print_data_details(&format!("Source records ({})", source_name), &source_records, limit);
    print_data_details(&format!("Baseline records ({})", baseline_name), &baseline_records, limit);

    info!("Removing duplicates");
    let source = remove_duplicates(source_records.clone());
    let baseline = remove_duplicates(baseline_records.clone());
    info!(
        "Source after dedup: {} ({} removed), baseline after dedup: {} ({} removed)",
        source.unique.len(),
        source.duplicates.len(),
        baseline.unique.len(),
        baseline.duplicates.len()
    );
    print_data_details(&format!("Duplicates removed ({})", source_name), &source.duplicates, limit);
    print_data_details(&format!("Duplicates removed ({})", baseline_name), &baseline.duplicates, limit);

    info!("Comparing against baseline");
    let new_only = compare_and_filter(&source.unique, &baseline.unique);
    info!("New records in source: {}", new_only.len());
    print_data_details("New records (source only)", &new_only, limit);

    save_text(&new_only, &config.filtered_text_file);
    save_json(&build_site(&new_only, config.cache_time), &config.new_only_json_file);

    info!("Merging baseline with new records");
    let combined = merge(&baseline.unique, &new_only);
    info!(
        "Combined total: {} (baseline {} + new {})",
        combined.len(),
        baseline.unique.len(),
        new_only.len()
    );
    print_data_details("Combined records (baseline + new)", &combined, limit);

    let combined_site = build_site(&combined, config.cache_time);
    save_json(&combined_site, &config.combined_json_file);
    save_base58(&combined_site, &config.combined_base58_file);
    info!("Processing complete");

    Ok(RunSummary {
        source_name,
        baseline_name,
        source_found: source_records.len(),
        source_unique: source.unique.len(),
        baseline_found: baseline_records.len(),
        baseline_unique: baseline.unique.len(),
        new_only: new_only.len(),
        combined: combined.len(),
        new_only_files: vec![
            config.new_only_json_file.display().to_string(),
            config.filtered_text_file.display().to_string(),
        ],
        combined_files: vec![
            config.combined_json_file.display().to_string(),
            config.combined_base58_file.display().to_string(),
        ],
    })
}
