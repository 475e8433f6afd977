use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::domain::resolve_language_code;
use crate::infrastructure::audio::TempAudioFile;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<C, T>(
    State(state): State<AppState<C, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    let mut audio_data: Option<Vec<u8>> = None;
    let mut language_hint: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("audio") => match field.bytes().await {
                Ok(bytes) => audio_data = Some(bytes.to_vec()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read audio field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read audio: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            Some("language") => {
                language_hint = field.text().await.ok();
            }
            _ => {}
        }
    }

    // Validation happens before any file I/O.
    let Some(audio_data) = audio_data else {
        tracing::warn!("Transcription request with no audio field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No audio file provided".to_string(),
            }),
        )
            .into_response();
    };

    let language = resolve_language_code(language_hint.as_deref());

    tracing::debug!(
        bytes = audio_data.len(),
        language = %language,
        "Processing audio upload"
    );

    // The guard owns the temp file for the rest of the handler; deletion on
    // drop covers every exit path, including backend failure.
    let temp_audio = match TempAudioFile::write(&audio_data).await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store uploaded audio");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to store audio: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .transcription_engine
        .transcribe(temp_audio.path(), language)
        .await
    {
        Ok(transcript) if !transcript.is_empty() => {
            tracing::info!(chars = transcript.len(), "Transcription completed");
            (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response()
        }
        Ok(_) => {
            tracing::warn!("Transcription backend returned empty transcript");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Transcription failed".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
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
