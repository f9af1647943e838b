//! Client configuration.
//!
//! Values come from the environment first and can then be overridden by
//! command-line flags through the builder methods.

use std::path::PathBuf;

use crate::api::DEFAULT_API_BASE;

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "KBCHAT_API_URL";
/// Environment variable holding the log file path
pub const LOG_FILE_ENV: &str = "KBCHAT_LOG_FILE";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash
    pub api_base: String,
    /// File the tracing output is written to
    pub log_file: PathBuf,
    /// Connect timeout for backend requests, in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_file: default_log_file(),
            request_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `KBCHAT_API_URL` and `KBCHAT_LOG_FILE`.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(API_URL_ENV) {
            config = config.with_api_base(url);
        }
        if let Some(path) = non_empty_env(LOG_FILE_ENV) {
            config = config.with_log_file(path);
        }
        config
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }
}

/// `~/.kbchat/kbchat.log`, or `./kbchat.log` without a home directory
pub fn default_log_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".kbchat").join("kbchat.log"),
        None => PathBuf::from("kbchat.log"),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
