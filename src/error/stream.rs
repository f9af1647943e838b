//! Streaming-related error types.
//!
//! Classifies the ways a `/chat` request can end badly so the UI can pick
//! the right status line and the log gets a stable error code.

use std::fmt;

use crate::traits::HttpError;

/// Stream-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The backend could not be reached at all.
    Unreachable { message: String },

    /// The backend answered `/chat` with a non-2xx status.
    Rejected { status: u16, message: String },

    /// The body broke off before the server finished it.
    ConnectionLost { message: String },

    /// The request could not be built.
    InvalidRequest { message: String },
}

impl StreamError {
    /// Get a user-friendly message for the status line.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::Unreachable { .. } => {
                "Could not reach the assistant backend. Is it running?".to_string()
            }
            StreamError::Rejected { status, .. } => {
                format!("The assistant backend rejected the request (HTTP {}).", status)
            }
            StreamError::ConnectionLost { .. } => {
                "The connection to the assistant backend was lost.".to_string()
            }
            StreamError::InvalidRequest { message } => {
                format!("Could not send the request: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Unreachable { .. } => "E_STREAM_UNREACHABLE",
            StreamError::Rejected { .. } => "E_STREAM_REJECTED",
            StreamError::ConnectionLost { .. } => "E_STREAM_CONN",
            StreamError::InvalidRequest { .. } => "E_STREAM_REQUEST",
        }
    }
}

impl From<HttpError> for StreamError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(message) | HttpError::Timeout(message) => {
                StreamError::Unreachable { message }
            }
            HttpError::ServerError { status, message } => StreamError::Rejected { status, message },
            HttpError::Io(message) | HttpError::Other(message) => {
                StreamError::ConnectionLost { message }
            }
            HttpError::InvalidUrl(message) => StreamError::InvalidRequest { message },
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Unreachable { message } => write!(f, "Backend unreachable: {}", message),
            StreamError::Rejected { status, message } => {
                write!(f, "Chat request rejected ({}): {}", status, message)
            }
            StreamError::ConnectionLost { message } => {
                write!(f, "Stream connection lost: {}", message)
            }
            StreamError::InvalidRequest { message } => write!(f, "Invalid request: {}", message),
        }
    }
}

impl std::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_error() {
        assert_eq!(
            StreamError::from(HttpError::ConnectionFailed("refused".to_string())),
            StreamError::Unreachable {
                message: "refused".to_string()
            }
        );
        assert_eq!(
            StreamError::from(HttpError::ServerError {
                status: 400,
                message: "Message is required".to_string()
            }),
            StreamError::Rejected {
                status: 400,
                message: "Message is required".to_string()
            }
        );
        assert!(matches!(
            StreamError::from(HttpError::Io("reset".to_string())),
            StreamError::ConnectionLost { .. }
        ));
    }

    #[test]
    fn test_user_message() {
        let err = StreamError::Rejected {
            status: 502,
            message: String::new(),
        };
        assert_eq!(
            err.user_message(),
            "The assistant backend rejected the request (HTTP 502)."
        );
        assert_eq!(err.error_code(), "E_STREAM_REJECTED");
    }

    #[test]
    fn test_display() {
        let err = StreamError::Unreachable {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Backend unreachable: connection refused");
    }
}
