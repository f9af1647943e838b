//! Application state management
//!
//! - ConversationState: messages, thinking steps, thread id and the
//!   per-request phase
//! - SessionStore: process-lifetime session flags (login gate)

pub mod conversation;
pub mod session;

pub use conversation::{
    ConversationState, PendingRequest, RequestPhase, SendError, CONNECTION_ERROR_MESSAGE,
};
pub use session::{SessionStore, SESSION_AUTH_KEY};
