//! AppMessage enum for async communication within the application.

use crate::api::LoginError;
use crate::error::StreamError;
use crate::sse::StreamEvent;

/// Messages sent from request tasks to the UI loop.
///
/// Every stream message carries the id of the request that produced it so
/// the UI can drop messages from a request it has moved on from.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// First bytes of the response body arrived
    StreamStarted { request_id: u64 },
    /// One parsed record
    StreamEvent { request_id: u64, event: StreamEvent },
    /// The body ended normally
    StreamFinished { request_id: u64 },
    /// The request or the body failed at the transport level
    StreamFailed { request_id: u64, error: StreamError },
    /// The task stopped because its cancellation token fired
    StreamCancelled { request_id: u64 },
    /// A login request completed
    LoginFinished {
        attempt: u64,
        result: Result<(), LoginError>,
    },
}

impl AppMessage {
    /// Request id for stream messages
    pub fn request_id(&self) -> Option<u64> {
        match self {
            AppMessage::StreamStarted { request_id }
            | AppMessage::StreamEvent { request_id, .. }
            | AppMessage::StreamFinished { request_id }
            | AppMessage::StreamFailed { request_id, .. }
            | AppMessage::StreamCancelled { request_id } => Some(*request_id),
            AppMessage::LoginFinished { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id() {
        assert_eq!(
            AppMessage::StreamFinished { request_id: 4 }.request_id(),
            Some(4)
        );
        assert_eq!(
            AppMessage::LoginFinished {
                attempt: 1,
                result: Ok(())
            }
            .request_id(),
            None
        );
    }
}
