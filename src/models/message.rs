use chrono::{DateTime, Utc};

use crate::sse::FinalContent;

/// Prefix for assistant messages produced from `error` records
pub const ERROR_PREFIX: &str = "[ERROR]: ";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// Displayable message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// Shown verbatim
    PlainText(String),
    /// Rendered through the markdown renderer
    Markdown(String),
}

impl MessageContent {
    pub fn text(&self) -> &str {
        match self {
            MessageContent::PlainText(text) | MessageContent::Markdown(text) => text,
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, MessageContent::Markdown(_))
    }
}

impl From<FinalContent> for MessageContent {
    fn from(content: FinalContent) -> Self {
        match content {
            FinalContent::PlainText(text) => MessageContent::PlainText(text),
            FinalContent::Markdown(text) => MessageContent::Markdown(text),
        }
    }
}

/// One entry of the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: MessageContent,
    /// When the client recorded the message
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// A message typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::PlainText(text.into()),
            created_at: Utc::now(),
        }
    }

    /// An assistant answer
    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// An assistant message reporting a backend `error` record
    pub fn assistant_error(detail: &str) -> Self {
        Self::assistant(MessageContent::PlainText(format!("{}{}", ERROR_PREFIX, detail)))
    }
}
