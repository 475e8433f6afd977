const MAX_VISIBLE_LENGTH: usize = 100;

const SENSITIVE_PATTERNS: &[(&str, &str)] = &[
    ("Bearer ", "Bearer [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Sanitizes user-supplied prompt text for safe logging: trims, truncates
/// long messages to a fixed visible prefix, and redacts credential-shaped
/// substrings.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let truncated = match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((idx, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..idx],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_sensitive(&truncated)
}

fn redact_sensitive(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in SENSITIVE_PATTERNS {
        if let Some(idx) = result.find(pattern) {
            let rest = &result[idx + pattern.len()..];
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }
    result
}
