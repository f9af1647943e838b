//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`LoginForm`] - Login screen state
//! - [`AppMessage`] - Messages from request tasks to the UI loop

mod cancel;
mod handlers;
mod login;
mod messages;
mod navigation;
mod stream;
mod types;

pub use messages::AppMessage;
pub use types::{LoginForm, Screen};

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::adapters::ReqwestHttpClient;
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::state::{ConversationState, SessionStore};
use crate::traits::HttpClient;

/// Main application state
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Flag to indicate if app should quit
    pub should_quit: bool,
    /// Conversation shown on the chat screen
    pub conversation: ConversationState,
    /// Process-lifetime session flags
    pub session: SessionStore,
    /// Login screen state
    pub login: LoginForm,
    /// Id of the login attempt whose answer is still wanted
    pub login_attempt: u64,
    /// Backend client shared with request tasks
    pub client: ApiClient<dyn HttpClient>,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to request tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Cancels the chat request in flight, if any
    pub active_cancel: Option<CancellationToken>,
    /// One-line status shown under the input
    pub notice: Option<String>,
    /// Conversation scroll position in lines above the bottom (0 = follow)
    pub scroll_offset: usize,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Redraw needed on the next loop iteration
    pub needs_redraw: bool,
}

impl App {
    /// Create the app around an already configured backend client.
    pub fn new(client: ApiClient<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            should_quit: false,
            conversation: ConversationState::new(),
            session: SessionStore::new(),
            login: LoginForm::default(),
            login_attempt: 0,
            client,
            message_rx: Some(message_rx),
            message_tx,
            active_cancel: None,
            notice: None,
            scroll_offset: 0,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    /// Create the app with the production reqwest client.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = ReqwestHttpClient::with_connect_timeout(Duration::from_secs(
            config.request_timeout_secs,
        ))
        .wrap_err("Failed to build HTTP client")?;
        let http: Arc<dyn HttpClient> = Arc::new(http);
        Ok(Self::new(ApiClient::shared(config.api_base.clone(), http)))
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations; spinners only move while something is pending
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.conversation.is_pending() || self.login.verifying {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.cancel_active_stream();
        self.should_quit = true;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("phase", &self.conversation.phase())
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
