//! Command-line argument parsing for kbchat.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally against another backend
    Run { api_url: Option<String> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name and is skipped. `--version` and
/// `--help` win over everything else; unknown arguments are ignored.
///
/// ```
/// use kbchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["kbchat".to_string(), "--api-url".to_string(), "http://kb:5055/api".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run { api_url: Some("http://kb:5055/api".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => api_url = args.next(),
            other => {
                if let Some(value) = other.strip_prefix("--api-url=") {
                    api_url = Some(value.to_string());
                }
            }
        }
    }

    CliCommand::Run { api_url }
}

/// Usage text for `--help`
pub fn usage() -> String {
    format!(
        "kbchat {}\n\
         Terminal client for the knowledge-base assistant\n\n\
         USAGE:\n    kbchat [OPTIONS]\n\n\
         OPTIONS:\n    \
         --api-url <URL>    Backend base URL (default: $KBCHAT_API_URL or http://localhost:5055/api)\n    \
         -V, --version      Print version\n    \
         -h, --help         Print this help\n",
        super::VERSION
    )
}
