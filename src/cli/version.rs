//! Version command for kbchat.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string printed by `--version`
pub fn version_line() -> String {
    format!("kbchat {}", VERSION)
}
