pub mod canonical;
pub mod names;
pub mod json_walk;
pub mod fragments;
pub mod line_context;
mod patterns;

use std::fmt;
use tracing::{debug, info, instrument};

use crate::models::Dataset;

pub use canonical::extract_actual_url;
pub use names::{extract_domain_name, extract_potential_names};

/// The strategy that produced a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    StructuredJson,
    RegexFragment,
    LineContext,
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStrategy::StructuredJson => write!(f, "JSON"),
            ParseStrategy::RegexFragment => write!(f, "FRAGMENT"),
            ParseStrategy::LineContext => write!(f, "LINE"),
        }
    }
}

/// Result of parsing one input text
///
/// A document that parses as JSON is handled by the structured walk alone.
/// Anything else goes through both the fragment scan and the line scan, whose
/// results are kept separately here and concatenated by `into_records`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    StructuredJson(Dataset),
    Textual {
        fragments: Dataset, // Records from the regex fragment scan
        lines: Dataset,     // Records from the contextual line scan
    },
}

impl ParseOutcome {
    /// Strategies that contributed to this outcome, in the order they ran
    pub fn strategies(&self) -> &'static [ParseStrategy] {
        match self {
            ParseOutcome::StructuredJson(_) => &[ParseStrategy::StructuredJson],
            ParseOutcome::Textual { .. } => &[ParseStrategy::RegexFragment, ParseStrategy::LineContext],
        }
    }

    /// Total number of records, duplicates included
    pub fn len(&self) -> usize {
        match self {
            ParseOutcome::StructuredJson(records) => records.len(),
            ParseOutcome::Textual { fragments, lines } => fragments.len() + lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the outcome into one dataset, fragment records before line records
    pub fn into_records(self) -> Dataset {
        match self {
            ParseOutcome::StructuredJson(records) => records,
            ParseOutcome::Textual { mut fragments, lines } => {
                fragments.extend(lines);
                fragments
            }
        }
    }
}

/// Parses raw file content into resource records
///
/// This function performs the following steps:
/// 1. If the trimmed text looks like a JSON document and parses, walks it structurally
/// 2. Otherwise scans the raw text for name/url field fragments
/// 3. And additionally pairs URLs with names line by line
///
/// The fragment and line scans overlap on purpose; repeated records are left
/// for deduplication.
///
/// # Arguments
/// * `content` - Full text of an input file
///
/// # Returns
/// * `ParseOutcome` - Records tagged with the strategy that found them
#[instrument(level = "debug", skip_all, fields(bytes = content.len()))]
pub fn parse_content(content: &str) -> ParseOutcome {
    let trimmed = content.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        match serde_json::from_str::<serde_json::Value>(content) {
            Ok(document) => {
                let records = json_walk::walk_json(&document, "");
                info!("Parsed content as a JSON document, {} records", records.len());
                return ParseOutcome::StructuredJson(records);
            }
            Err(e) => {
                info!("Full JSON parse failed ({}), falling back to fragment scan", e);
            }
        }
    } else {
        debug!("Content is not a JSON document, using fragment and line scans");
    }

    let fragments = fragments::parse_fragments(content);
    let lines = line_context::parse_lines_with_context(content);
    info!(
        "Text scan complete: {} fragment records, {} line records",
        fragments.len(),
        lines.len()
    );

    ParseOutcome::Textual { fragments, lines }
}
