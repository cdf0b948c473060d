use std::collections::HashSet;
use tracing::debug;

use crate::models::{Dataset, ResourceRecord};

/// Result of removing repeated endpoints from a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    pub unique: Dataset,     // First occurrence of every URL, in input order
    pub duplicates: Dataset, // Every later occurrence, in input order
}

/// Removes records whose URL was already seen, keeping the first occurrence
///
/// # Arguments
/// * `records` - Dataset to deduplicate; names are not compared
///
/// # Returns
/// * `Deduplicated` - The kept records and the dropped repeats
pub fn remove_duplicates(records: Dataset) -> Deduplicated {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut result = Deduplicated::default();

    for record in records {
        if seen.insert(record.url.clone()) {
            result.unique.push(record);
        } else {
            result.duplicates.push(record);
        }
    }

    debug!(
        "Deduplicated to {} records, {} repeats removed",
        result.unique.len(),
        result.duplicates.len()
    );
    result
}

/// Returns the records of `primary` whose URL does not appear anywhere in `baseline`
pub fn compare_and_filter(primary: &[ResourceRecord], baseline: &[ResourceRecord]) -> Dataset {
    let known: HashSet<&str> = baseline.iter().map(|r| r.url.as_str()).collect();
    primary
        .iter()
        .filter(|r| !known.contains(r.url.as_str()))
        .cloned()
        .collect()
}

/// Appends new records after the baseline ones
pub fn merge(baseline: &[ResourceRecord], additions: &[ResourceRecord]) -> Dataset {
    baseline.iter().chain(additions).cloned().collect()
}
