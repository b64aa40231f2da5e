//! Tracing setup.
//!
//! The terminal is in the alternate screen while folio runs, so log lines go
//! to `<data_dir>/folio.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{StartupConfig, DEFAULT_LOG_FILTER};

/// Build the filter from `directives`, falling back to the default filter
/// when they do not parse.
pub fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns `false` when logging stays disabled: no data directory, the file
/// cannot be opened, or a subscriber is already installed. None of these stop
/// the portfolio from running.
pub fn init_tracing(config: &StartupConfig) -> bool {
    let Some(path) = config.log_path() else {
        return false;
    };
    let Some(file) = open_log_file(&path) else {
        return false;
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(layer)
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        let filter = build_filter("folio=debug,reqwest=warn");
        assert!(filter.to_string().to_lowercase().contains("folio=debug"));
    }

    #[test]
    fn test_build_filter_falls_back() {
        let filter = build_filter("folio=loudest");
        assert_eq!(filter.to_string().to_lowercase(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_no_data_dir_disables_logging() {
        let config = StartupConfig::new().with_data_dir(None);
        assert!(!init_tracing(&config));
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("folio.log");
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }
}
