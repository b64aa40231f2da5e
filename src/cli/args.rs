//! Command-line argument parsing.

/// Options for an interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Language to switch to after mount (`--lang <code>`)
    pub lang: Option<String>,
    /// Reveal every section immediately (`--reduced-motion`)
    pub reduced_motion: bool,
    /// Skip the profile statistics request (`--offline`)
    pub offline: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
  --lang <tr|en>      Start in the given language
  --reduced-motion    Show all sections without fade-in
  --offline           Do not fetch profile statistics
  -V, --version       Print version
  -h, --help          Print this help";

/// Parse command-line arguments, program name first.
///
/// Unknown flags are ignored. `--lang` without a value is ignored as well;
/// an unsupported value is passed through for `validate_options` to reject.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--reduced-motion" => options.reduced_motion = true,
            "--offline" => options.offline = true,
            "--lang" => {
                if let Some(code) = args.next() {
                    options.lang = Some(code);
                }
            }
            other => {
                if let Some(code) = other.strip_prefix("--lang=") {
                    options.lang = Some(code.to_string());
                }
            }
        }
    }
    CliCommand::Run(options)
}
