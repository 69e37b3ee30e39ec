const PREVIEW_CHARS: usize = 100;
const SECRET_MARKERS: [&str; 6] = ["Bearer ", "api-key=", "api_key=", "sig=", "password=", "token="];

/// Short, secret-free rendering of request text for debug logs.
pub fn preview_for_log(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let mut preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    if total > PREVIEW_CHARS {
        preview.push_str(&format!("... ({total} chars total)"));
    }

    redact_secrets(&preview)
}

/// Masks the value after every secret marker, up to the next delimiter.
pub fn redact_secrets(text: &str) -> String {
    let mut redacted = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((idx, marker)) = SECRET_MARKERS
        .iter()
        .filter_map(|marker| rest.find(marker).map(|idx| (idx, *marker)))
        .min_by_key(|(idx, _)| *idx)
    {
        let value_start = idx + marker.len();
        redacted.push_str(&rest[..value_start]);
        redacted.push_str("[REDACTED]");

        let value_len = rest[value_start..]
            .find(is_delimiter)
            .unwrap_or(rest.len() - value_start);
        rest = &rest[value_start + value_len..];
    }

    redacted.push_str(rest);
    redacted
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '&' | '"' | '\'')
}
