mod chat;
mod health;
mod transcribe;

use serde::Serialize;

pub use chat::chat_handler;
pub use health::health_handler;
pub use transcribe::transcribe_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
