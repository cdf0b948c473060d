use std::fmt::Write as _;

use crate::models::ResourceRecord;

/// Counts shown in the end-of-run summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub source_name: String,
    pub baseline_name: String,
    pub source_found: usize,
    pub source_unique: usize,
    pub baseline_found: usize,
    pub baseline_unique: usize,
    pub new_only: usize,
    pub combined: usize,
    pub new_only_files: Vec<String>,
    pub combined_files: Vec<String>,
}

/// Renders a titled section listing at most `max_items` records
pub fn format_data_details(title: &str, records: &[ResourceRecord], max_items: usize) -> String {
    let rule = "=".repeat(50);
    let thin = "-".repeat(50);
    let mut out = format!("\n{rule}\n{title}\n{rule}\n");

    if records.is_empty() {
        out.push_str("No records\n");
        return out;
    }

    let shown = records.len().min(max_items);
    let _ = writeln!(out, "Total: {} records", records.len());
    let _ = writeln!(out, "Showing first {}:", shown);
    let _ = writeln!(out, "{thin}");
    for (i, record) in records.iter().take(shown).enumerate() {
        let _ = writeln!(out, "{:2}. Name: {}", i + 1, record.name);
        let _ = writeln!(out, "    URL:  {}", record.url);
        out.push('\n');
    }
    if records.len() > max_items {
        let _ = writeln!(out, "... ({} more records omitted)", records.len() - max_items);
    }
    let _ = writeln!(out, "{thin}");
    out
}

/// Prints a record section to stdout
pub fn print_data_details(title: &str, records: &[ResourceRecord], max_items: usize) {
    print!("{}", format_data_details(title, records, max_items));
}

/// Renders the final statistics block
pub fn format_summary(summary: &RunSummary) -> String {
    let rule = "=".repeat(60);
    let mut out = format!("\n{rule}\nProcessing summary\n{rule}\n");
    let _ = writeln!(out, "Source ({}):", summary.source_name);
    let _ = writeln!(out, "  - records found:     {}", summary.source_found);
    let _ = writeln!(out, "  - after dedup:       {}", summary.source_unique);
    let _ = writeln!(out, "  - new vs baseline:   {}", summary.new_only);
    out.push('\n');
    let _ = writeln!(out, "Baseline ({}):", summary.baseline_name);
    let _ = writeln!(out, "  - records found:     {}", summary.baseline_found);
    let _ = writeln!(out, "  - after dedup:       {}", summary.baseline_unique);
    out.push('\n');
    let _ = writeln!(out, "--- Output files ---");
    let _ = writeln!(out, "New only: {} records", summary.new_only);
    let _ = writeln!(out, "  - files: {}", summary.new_only_files.join(", "));
    let _ = writeln!(out, "Combined: {} records (baseline + new)", summary.combined);
    let _ = writeln!(out, "  - files: {}", summary.combined_files.join(", "));
    let _ = writeln!(out, "{rule}");
    out
}

pub fn print_summary(summary: &RunSummary) {
    print!("{}", format_summary(summary));
}
