//! Login flow for the App.

use crate::api::LoginError;

use super::{App, AppMessage, Screen};

impl App {
    /// Submit the password field.
    ///
    /// Ignored while a verification is running. An empty password is
    /// rejected locally without a request.
    pub fn submit_login(&mut self) {
        if self.login.verifying {
            return;
        }

        if self.login.password.trim().is_empty() {
            self.login.error = Some(LoginError::EmptyPassword.user_message());
            return;
        }

        self.login.verifying = true;
        self.login.error = None;
        self.login_attempt += 1;
        self.mark_dirty();

        let attempt = self.login_attempt;
        let password = self.login.password.clone();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.login(&password).await;
            let _ = message_tx.send(AppMessage::LoginFinished { attempt, result });
        });
    }

    /// Apply the answer of a login attempt.
    pub(super) fn finish_login(&mut self, attempt: u64, result: Result<(), LoginError>) {
        if attempt != self.login_attempt {
            tracing::debug!(attempt, "Dropping answer of abandoned login attempt");
            return;
        }
        self.login.verifying = false;

        match result {
            Ok(()) => {
                self.session.mark_authenticated();
                self.login.clear();
                if self.screen == Screen::Login {
                    self.screen = Screen::Chat;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.login.error = Some(e.user_message());
            }
        }
    }

    /// Leave the login screen; an answer still in flight is ignored.
    pub(super) fn abandon_login(&mut self) {
        if self.login.verifying {
            self.login_attempt += 1;
            self.login.verifying = false;
        }
        self.login.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::{app_with_mock, step};
    use crate::app::Screen;
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    #[test]
    fn test_empty_password_rejected_locally() {
        let (mut app, mock) = app_with_mock();
        app.screen = Screen::Login;
        app.submit_login();
        assert_eq!(app.login.error.as_deref(), Some("Password cannot be empty."));
        assert!(!app.login.verifying);
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_successful_login_opens_chat() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"success":true,"message":"Login successful"}"#),
        )));
        app.screen = Screen::Login;
        app.login.password = "correct".to_string();

        app.submit_login();
        assert!(app.login.verifying);
        step(&mut app).await;

        assert!(app.session.is_authenticated());
        assert_eq!(app.screen, Screen::Chat);
        assert!(app.login.password.is_empty());
        assert!(!app.login.verifying);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_message() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            401,
            Bytes::from(r#"{"success":false}"#),
        )));
        app.screen = Screen::Login;
        app.login.password = "wrong".to_string();

        app.submit_login();
        step(&mut app).await;

        assert!(!app.session.is_authenticated());
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.login.error.as_deref(), Some("Invalid password."));
    }

    #[tokio::test]
    async fn test_login_connection_error() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        app.screen = Screen::Login;
        app.login.password = "pw".to_string();

        app.submit_login();
        step(&mut app).await;

        assert_eq!(
            app.login.error.as_deref(),
            Some("A connection error occurred. Could not verify password.")
        );
    }

    #[tokio::test]
    async fn test_abandoned_login_answer_ignored() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"success":true}"#),
        )));
        app.screen = Screen::Login;
        app.login.password = "pw".to_string();

        app.submit_login();
        app.show_instructions();
        step(&mut app).await;

        assert!(!app.session.is_authenticated());
        assert_eq!(app.screen, Screen::Instructions);
    }
}
