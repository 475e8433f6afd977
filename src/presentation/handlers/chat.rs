use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::domain::{AgentType, ChatMessage, ChatRole};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorResponse;

/// Fixed loan-advisory persona submitted as the system message on every
/// request.
const SYSTEM_PROMPT: &str = "You are an AI-driven loan advisory system designed to provide structured, accurate, and loan-focused assistance. Your architecture consists of specialized agents that work together to ensure efficient and reliable responses.

🔹 Primary Goals:
1️⃣ Confirm user intent before providing any loan-related advice.
2️⃣ Provide eligibility assessments based on financial details.
3️⃣ Guide users through loan applications (steps, documents).
4️⃣ Offer financial stability tips to improve loan approval chances.
5️⃣ Maintain compliance with financial regulations and offer neutral, ethical guidance.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // Accepted for forward compatibility with the client; not used in any
    // decision downstream.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub agent_type: AgentType,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<C, T>(
    State(state): State<AppState<C, T>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    let message = match request.message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => {
            tracing::warn!("Chat request with no message");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No message provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        prompt = %sanitize_prompt(message),
        user_id = ?request.user_id,
        conversation_id = ?request.conversation_id,
        "Processing chat request"
    );

    let messages = [
        ChatMessage::new(ChatRole::System, SYSTEM_PROMPT),
        ChatMessage::new(ChatRole::User, message),
    ];

    match state.chat_client.complete(&messages).await {
        Ok(reply) => {
            let agent_type = AgentType::classify(message);
            tracing::info!(agent_type = %agent_type, "Chat request completed");
            (
                StatusCode::OK,
                Json(ChatResponse {
                    response: reply,
                    agent_type,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
