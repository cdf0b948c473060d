use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::models::{Dataset, ResourceRecord};
use super::canonical::extract_actual_url;
use super::names::{extract_domain_name, extract_potential_names};
use super::patterns::LINE_URL_REGEX;

/// Number of lines inspected on each side of a URL when looking for a name
const CONTEXT_RANGE: usize = 5;

/// Extracts records line by line, pairing each URL with a nearby name
///
/// For every valid endpoint the name comes from, in order: a name on the same
/// line, the oldest name queued from an earlier line that had no endpoint, the
/// surrounding lines, and finally the URL's host.
pub fn parse_lines_with_context(content: &str) -> Dataset {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut records = Dataset::new();
    let mut pending_names: VecDeque<String> = VecDeque::new();

    for (index, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut found_valid_url = false;
        for token in LINE_URL_REGEX.find_iter(line) {
            let Some(url) = extract_actual_url(token.as_str()) else {
                continue;
            };
            found_valid_url = true;

            let name = extract_potential_names(line)
                .into_iter()
                .next()
                .or_else(|| pending_names.pop_front())
                .or_else(|| find_contextual_name(&lines, index))
                .unwrap_or_else(|| extract_domain_name(&url));

            trace!("Line {}: paired '{}' with {}", index + 1, name, url);
            records.push(ResourceRecord::new(name, url));
        }

        if !found_valid_url {
            // Each distinct name on a line is queued once
            let names = extract_potential_names(line);
            if !names.is_empty() {
                trace!("Line {}: queued names {:?}", index + 1, names);
            }
            pending_names.extend(names);
        }
    }

    debug!("Line scan found {} records, {} names left unused", records.len(), pending_names.len());
    records
}

/// Searches the lines around `current` for the first one that yields a name
///
/// Earlier lines are scanned first, oldest to newest, then the following lines.
fn find_contextual_name(lines: &[&str], current: usize) -> Option<String> {
    let before = current.saturating_sub(CONTEXT_RANGE)..current;
    let after = (current + 1)..lines.len().min(current + 1 + CONTEXT_RANGE);

    before
        .chain(after)
        .map(|i| lines[i].trim())
        .filter(|line| !line.is_empty())
        .find_map(|line| extract_potential_names(line).into_iter().next())
}
