use async_trait::async_trait;

use crate::domain::ChatMessage;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Submits an ordered list of role-tagged messages and returns the
    /// generated reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
