use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use loanwise::infrastructure::audio::OpenAiWhisperEngine;
use loanwise::infrastructure::llm::MistralClient;
use loanwise::infrastructure::observability::{init_tracing, TracingConfig};
use loanwise::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    init_tracing(TracingConfig::default(), port);

    // The chat credential is required; refusing to start beats failing every
    // request later.
    let mistral_api_key = std::env::var("MISTRAL_API_KEY")
        .map_err(|_| anyhow::anyhow!("MISTRAL_API_KEY must be set"))?;

    let chat_client = Arc::new(MistralClient::new(
        mistral_api_key,
        std::env::var("MISTRAL_BASE_URL").ok(),
        std::env::var("MISTRAL_CHAT_MODEL").ok(),
    ));

    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        std::env::var("WHISPER_BASE_URL").ok(),
        std::env::var("WHISPER_MODEL").ok(),
    ));

    let state = AppState {
        chat_client,
        transcription_engine,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
