use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::output::DEFAULT_CACHE_TIME;
use crate::processor::DEFAULT_WORKERS;

/// Base name of the optional configuration file (`vod_sources.toml`, `.json`, ...)
pub const CONFIG_FILE: &str = "vod_sources";

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "VOD_SOURCES";

/// Configuration for a reconciliation run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Free-form listing to extract new resources from
    pub source_file: PathBuf,

    /// Already published resources to compare against
    pub baseline_file: PathBuf,

    /// `name url` lines of resources only found in the source
    pub filtered_text_file: PathBuf,

    /// Site document of resources only found in the source
    pub new_only_json_file: PathBuf,

    /// Site document of baseline plus new resources
    pub combined_json_file: PathBuf,

    /// Base-58 encoding of the combined site document
    pub combined_base58_file: PathBuf,

    /// Diagnostic log written in debug mode
    pub debug_log_file: PathBuf,

    /// Number of files parsed at the same time
    pub workers: usize,

    /// `cache_time` field of generated site documents
    pub cache_time: u32,

    /// Records shown per section in the console report
    pub display_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from("shipinywan.txt"),
            baseline_file: PathBuf::from("basic.json"),
            filtered_text_file: PathBuf::from("filtered_results.txt"),
            new_only_json_file: PathBuf::from("video_sources.json"),
            combined_json_file: PathBuf::from("combined_sources.json"),
            combined_base58_file: PathBuf::from("combined_sources_base58.txt"),
            debug_log_file: PathBuf::from("logs.txt"),
            workers: DEFAULT_WORKERS,
            cache_time: DEFAULT_CACHE_TIME,
            display_limit: 20,
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, the optional config file and the environment
    ///
    /// Later sources override earlier ones, e.g. `VOD_SOURCES_WORKERS=8`.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Like `load`, reading the config file from a specific base path
    pub fn load_from(config_file: &str) -> Result<Self> {
        ::config::Config::builder()
            .add_source(::config::File::with_name(config_file).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
