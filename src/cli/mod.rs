//! CLI module for kbchat.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use kbchat::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // Continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand};
pub use version::{version_line, VERSION};

/// Print the output of a non-TUI command.
///
/// Returns `true` if the command was handled and the process should exit,
/// `false` for [`CliCommand::Run`].
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            print!("{}", usage());
            true
        }
        CliCommand::Run { .. } => false,
    }
}
