mod temp_audio_test;
mod whisper_engine_test;
