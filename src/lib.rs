pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod processor;
pub mod reconcile;
pub mod report;
pub mod source_parser;
pub mod utils;

pub use models::{Dataset, ResourceRecord, UNKNOWN_RESOURCE};
