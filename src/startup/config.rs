//! Startup configuration types.
//!
//! Settings come from three places, applied in order: defaults, environment
//! variables ([`StartupConfig::from_env`]) and command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::splash::SPLASH_DELAY;
use crate::stats::{DEFAULT_API_BASE, DEFAULT_USERNAME};

/// Overrides the data directory (`~/.folio`).
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";
/// Set to `1` or `true` to disable section fade-ins.
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";
/// Set to `1` or `true` to skip the profile statistics request.
pub const ENV_OFFLINE: &str = "FOLIO_OFFLINE";
/// Log filter directives, `tracing_subscriber::EnvFilter` syntax.
pub const ENV_LOG: &str = "FOLIO_LOG";

/// Name of the data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".folio";

/// Filter used when `FOLIO_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "folio=info";

/// Configuration for one run of the portfolio.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use folio::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_reduced_motion(true)
///     .with_offline(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Holds `storage.json` and `folio.log`; `None` disables both
    pub data_dir: Option<PathBuf>,
    /// Render every section in its final state with no observer
    pub reduced_motion: bool,
    /// Skip the profile statistics request
    pub offline: bool,
    /// Log filter directives
    pub log_filter: String,
    /// Language requested on the command line, validated after mount
    pub initial_lang: Option<String>,
    /// Root of the profile statistics API
    pub api_base: String,
    /// Profile whose statistics are shown
    pub github_username: String,
    /// How long the loading screen stays up
    pub splash_delay: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            reduced_motion: false,
            offline: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            initial_lang: None,
            api_base: DEFAULT_API_BASE.to_string(),
            github_username: DEFAULT_USERNAME.to_string(),
            splash_delay: SPLASH_DELAY,
        }
    }
}

impl StartupConfig {
    /// Create a new StartupConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_initial_lang(mut self, code: impl Into<String>) -> Self {
        self.initial_lang = Some(code.into());
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_github_username(mut self, username: impl Into<String>) -> Self {
        self.github_username = username.into();
        self
    }

    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay = delay;
        self
    }

    /// Defaults overridden by `FOLIO_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = std::env::var_os(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if env_flag(ENV_REDUCED_MOTION) {
            config.reduced_motion = true;
        }
        if env_flag(ENV_OFFLINE) {
            config.offline = true;
        }
        if let Ok(filter) = std::env::var(ENV_LOG) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }

    /// Path of the log file, if there is a data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("folio.log"))
    }
}

/// `~/.folio`, if the home directory is known.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
