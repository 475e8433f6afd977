use std::sync::Arc;

use crate::application::ports::{ChatClient, TranscriptionEngine};

/// Shared per-process state: the two backend clients, constructed once at
/// startup and reused across requests.
pub struct AppState<C, T>
where
    C: ChatClient,
    T: TranscriptionEngine,
{
    pub chat_client: Arc<C>,
    pub transcription_engine: Arc<T>,
}

impl<C, T> Clone for AppState<C, T>
where
    C: ChatClient,
    T: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            chat_client: Arc::clone(&self.chat_client),
            transcription_engine: Arc::clone(&self.transcription_engine),
        }
    }
}
