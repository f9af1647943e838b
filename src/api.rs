//! Assistant API client for backend communication.
//!
//! Two endpoints: `POST {base}/chat` answers with a stream of `data:` records
//! and `POST {base}/login` checks the shared access password.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{ChatRequest, LoginRequest, LoginResponse};
use crate::sse::TransportReader;
use crate::traits::{Headers, HttpClient, HttpError};

/// Default backend location
pub const DEFAULT_API_BASE: &str = "http://localhost:5055/api";

/// Error type for chat requests
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    /// Transport failure or non-2xx status
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Outcome of a failed login attempt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    /// Rejected locally, no request was sent
    #[error("Password cannot be empty.")]
    EmptyPassword,
    /// Backend said no
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached or answered garbage
    #[error("Login request failed: {0}")]
    Connection(String),
}

impl LoginError {
    /// Text shown under the password field
    pub fn user_message(&self) -> String {
        match self {
            LoginError::EmptyPassword | LoginError::Rejected(_) => self.to_string(),
            LoginError::Connection(_) => {
                "A connection error occurred. Could not verify password.".to_string()
            }
        }
    }
}

/// Shared, type-erased HTTP client
pub type SharedHttpClient = Arc<dyn HttpClient>;

/// Client for the assistant backend.
///
/// Cheap to clone; the underlying HTTP client is shared. The UI holds an
/// `ApiClient<dyn HttpClient>` so production and tests use the same `App`.
pub struct ApiClient<C: HttpClient + ?Sized = ReqwestHttpClient> {
    /// Base URL without trailing slash, e.g. `http://localhost:5055/api`
    pub base_url: String,
    http: Arc<C>,
}

impl<C: HttpClient + ?Sized> std::fmt::Debug for ApiClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<C: HttpClient + ?Sized> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl ApiClient<ReqwestHttpClient> {
    /// Client against the default base URL with a plain reqwest client
    pub fn new() -> Self {
        Self::with_http(DEFAULT_API_BASE, ReqwestHttpClient::new())
    }
}

impl Default for ApiClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        Self::with_shared_http(base_url, Arc::new(http))
    }
}

impl ApiClient<dyn HttpClient> {
    /// Type-erased client, as held by the UI
    pub fn shared(base_url: impl Into<String>, http: SharedHttpClient) -> Self {
        Self::with_shared_http(base_url, http)
    }
}

impl<C: HttpClient + ?Sized> ApiClient<C> {
    pub fn with_shared_http(base_url: impl Into<String>, http: Arc<C>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Start a chat request and hand back a reader over the response body.
    ///
    /// Fails if the request cannot be sent or the status is not 2xx; errors
    /// inside the body surface later through the reader.
    pub async fn chat(&self, request: &ChatRequest) -> Result<TransportReader, ApiError> {
        let body = serde_json::to_string(request)?;
        let url = self.chat_url();

        tracing::info!(
            url = %url,
            thread_id = request.thread_id.as_deref().unwrap_or("<new>"),
            "Sending chat request"
        );

        let stream = self.http.post_stream(&url, &body, &Headers::new()).await?;
        Ok(TransportReader::new(stream))
    }

    /// Check a password against the backend.
    ///
    /// Succeeds only for a 2xx status whose body says `"success": true`.
    pub async fn login(&self, password: &str) -> Result<(), LoginError> {
        if password.trim().is_empty() {
            return Err(LoginError::EmptyPassword);
        }

        let body = serde_json::to_string(&LoginRequest {
            password: password.to_string(),
        })
        .map_err(|e| LoginError::Connection(e.to_string()))?;

        let response = self
            .http
            .post(&self.login_url(), &body, &Headers::new())
            .await
            .map_err(|e| LoginError::Connection(e.to_string()))?;

        let parsed: LoginResponse = response
            .json()
            .map_err(|e| LoginError::Connection(format!("undecodable response: {}", e)))?;

        if response.is_success() && parsed.success {
            tracing::info!("Login accepted");
            Ok(())
        } else {
            tracing::info!(status = response.status, "Login rejected");
            Err(LoginError::Rejected(
                parsed
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Invalid password.".to_string()),
            ))
        }
    }
}
