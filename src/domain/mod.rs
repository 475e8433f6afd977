mod agent_type;
mod chat_message;
mod language;

pub use agent_type::AgentType;
pub use chat_message::{ChatMessage, ChatRole};
pub use language::resolve_language_code;
