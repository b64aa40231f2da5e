//! Command-line interface.
//!
//! Called early in main(), before the terminal is touched:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let options = match run_cli_command(command) {
//!     Ok(options) => options,
//!     Err(output) => {
//!         println!("{output}");
//!         return Ok(());
//!     }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_string, VERSION};

use crate::error::FolioResult;
use crate::i18n::Lang;
use crate::startup::StartupConfig;

/// Resolve a command to run options, or to the text a one-shot command
/// prints instead of starting the TUI.
pub fn run_cli_command(command: CliCommand) -> Result<RunOptions, String> {
    match command {
        CliCommand::Version => Err(version_string()),
        CliCommand::Help => Err(USAGE.to_string()),
        CliCommand::Run(options) => Ok(options),
    }
}

/// Reject option values that can never work, before the terminal is touched.
pub fn validate_options(options: &RunOptions) -> FolioResult<()> {
    if let Some(code) = &options.lang {
        code.parse::<Lang>()?;
    }
    Ok(())
}

/// Layer command-line options over the environment-derived config.
pub fn apply_options(config: StartupConfig, options: &RunOptions) -> StartupConfig {
    let mut config = config;
    if options.reduced_motion {
        config = config.with_reduced_motion(true);
    }
    if options.offline {
        config = config.with_offline(true);
    }
    if let Some(code) = &options.lang {
        config = config.with_initial_lang(code.clone());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_options() {
        let options = RunOptions {
            offline: true,
            ..RunOptions::default()
        };
        assert_eq!(run_cli_command(CliCommand::Run(options.clone())), Ok(options));
    }

    #[test]
    fn test_one_shot_commands_return_output() {
        assert_eq!(run_cli_command(CliCommand::Help), Err(USAGE.to_string()));
        assert!(run_cli_command(CliCommand::Version)
            .unwrap_err()
            .contains(VERSION));
    }

    #[test]
    fn test_validate_accepts_supported_lang() {
        let options = RunOptions {
            lang: Some("en".to_string()),
            ..RunOptions::default()
        };
        assert!(validate_options(&options).is_ok());
        assert!(validate_options(&RunOptions::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_lang() {
        let options = RunOptions {
            lang: Some("EN".to_string()),
            ..RunOptions::default()
        };
        let err = validate_options(&options).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::User);
        assert!(err.user_message().contains("'EN'"));
    }

    #[test]
    fn test_apply_options_overrides_config() {
        let base = StartupConfig::new();
        let config = apply_options(
            base,
            &RunOptions {
                lang: Some("en".to_string()),
                reduced_motion: true,
                offline: true,
            },
        );
        assert!(config.reduced_motion);
        assert!(config.offline);
        assert_eq!(config.initial_lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_apply_options_keeps_env_flags() {
        let base = StartupConfig::new().with_offline(true);
        let config = apply_options(base, &RunOptions::default());
        assert!(config.offline);
    }
}
