const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Maps a caller-supplied language hint to the code the transcription backend
/// expects. Accepts either an ISO 639-1 code or an English language name;
/// absent or unmapped hints fall back to English.
pub fn resolve_language_code(hint: Option<&str>) -> &'static str {
    let Some(hint) = hint else {
        return DEFAULT_LANGUAGE_CODE;
    };

    match hint.trim().to_lowercase().as_str() {
        "en" | "english" => "en",
        "hi" | "hindi" => "hi",
        "ta" | "tamil" => "ta",
        "te" | "telugu" => "te",
        "kn" | "kannada" => "kn",
        "mr" | "marathi" => "mr",
        "bn" | "bengali" => "bn",
        "es" | "spanish" => "es",
        "fr" | "french" => "fr",
        "de" | "german" => "de",
        _ => DEFAULT_LANGUAGE_CODE,
    }
}
