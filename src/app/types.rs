//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`LoginForm`] - Password field state on the login screen

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Welcome text, intended use and the security notice
    #[default]
    Instructions,
    /// Password gate
    Login,
    /// The conversation
    Chat,
}

/// Login screen state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Typed password (rendered masked)
    pub password: String,
    /// Inline error under the field
    pub error: Option<String>,
    /// A login request is in flight
    pub verifying: bool,
}

impl LoginForm {
    /// Clear everything except an in-flight verification
    pub fn clear(&mut self) {
        self.password.clear();
        self.error = None;
    }
}
