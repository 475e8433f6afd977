use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use loanwise::application::ports::{TranscriptionEngine, TranscriptionError};
use loanwise::infrastructure::audio::{OpenAiWhisperEngine, TempAudioFile};

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_stored_audio_file_when_transcribing_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "Hello from Whisper\n").await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let audio = TempAudioFile::write(b"fake audio bytes").await.unwrap();

    let result = engine.transcribe(audio.path(), "en").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_request_failed() {
    let (base_url, shutdown_tx) =
        start_mock_whisper_server(400, r#"{"error": {"message": "bad audio"}}"#).await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let audio = TempAudioFile::write(b"bad audio").await.unwrap();

    let result = engine.transcribe(audio.path(), "en").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_audio_file_when_transcribing_then_returns_file_read_failed() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "unused").await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let missing = std::env::temp_dir().join("does-not-exist.wav");

    let result = engine.transcribe(&missing, "en").await;

    assert!(matches!(result, Err(TranscriptionError::FileReadFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_response_body_when_transcribing_then_returns_empty_string() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "").await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let audio = TempAudioFile::write(b"silent audio").await.unwrap();

    let result = engine.transcribe(audio.path(), "en").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}
