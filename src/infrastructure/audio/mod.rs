mod openai_whisper_engine;
mod temp_audio;

pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use temp_audio::TempAudioFile;
