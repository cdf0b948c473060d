use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the logging subscriber for the whole run
///
/// Logs go to stdout at INFO level. In debug mode the level is DEBUG and every
/// event is also written to `log_file`, which is truncated first. If that file
/// cannot be created the error is logged and only stdout is used. `RUST_LOG`
/// takes precedence over both defaults when set.
///
/// # Arguments
/// * `debug_mode` - Whether verbose diagnostics are enabled
/// * `log_file` - Diagnostic file used in debug mode
///
/// # Returns
/// * `Result<()>` - Error if a subscriber is already set
pub fn init_logger(debug_mode: bool, log_file: &Path) -> Result<()> {
    let default_level = if debug_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let mut file_error = None;
    let writer = if debug_mode {
        match File::create(log_file) {
            Ok(file) => BoxMakeWriter::new(std::io::stdout.and(Mutex::new(file))),
            Err(e) => {
                file_error = Some(e);
                BoxMakeWriter::new(std::io::stdout)
            }
        }
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(debug_mode)
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Logger already initialized")?;
    info!("Logger initialized");
    match file_error {
        Some(e) => error!("Cannot create log file {}: {}, logging to console only", log_file.display(), e),
        None if debug_mode => debug!("Debug mode on, also writing to {}", log_file.display()),
        None => {}
    }

    Ok(())
}
