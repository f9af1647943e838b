//! Session-level state
//!
//! A small in-memory key/value store standing in for browser session
//! storage. It lives for the process only and is never written to disk.

use std::collections::HashMap;

/// Key of the flag set after a successful login
pub const SESSION_AUTH_KEY: &str = "kbchat-authenticated";

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Whether the login gate has been passed in this process
    pub fn is_authenticated(&self) -> bool {
        self.get(SESSION_AUTH_KEY) == Some("true")
    }

    pub fn mark_authenticated(&mut self) {
        self.set(SESSION_AUTH_KEY, "true");
    }
}
