use tracing::{debug, info};

use crate::models::{Dataset, ResourceRecord};
use super::canonical::extract_actual_url;
use super::patterns::FRAGMENT_PATTERNS;

/// Scans raw text for JSON-like name/url field pairs without parsing it as JSON
///
/// Every pattern runs over the whole text and all matches are kept, so the
/// same resource may be reported more than once. Which capture is the URL is
/// decided by canonicalization alone: the second capture is tried first.
pub fn parse_fragments(content: &str) -> Dataset {
    let mut records = Dataset::new();

    for (index, pattern) in FRAGMENT_PATTERNS.iter().enumerate() {
        let before = records.len();
        for caps in pattern.captures_iter(content) {
            let (Some(first), Some(second)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let (first, second) = (first.as_str(), second.as_str());

            let record = if let Some(url) = extract_actual_url(second) {
                ResourceRecord::new(first.trim(), url)
            } else if let Some(url) = extract_actual_url(first) {
                ResourceRecord::new(second.trim(), url)
            } else {
                debug!("Fragment discarded, no endpoint in ('{}', '{}')", first, second);
                continue;
            };
            records.push(record);
        }
        debug!("Fragment pattern {} matched {} records", index + 1, records.len() - before);
    }

    info!("Fragment scan found {} records", records.len());
    records
}
