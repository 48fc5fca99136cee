const MAX_VISIBLE_CHARS: usize = 40;

/// Shortens a transcript for log output; dictated notes may carry patient details.
pub fn redact_transcript(transcript: &str) -> String {
    let trimmed = transcript.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return mask_digits(trimmed);
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", mask_digits(&visible), total)
}

// Phone numbers, dates of birth and record numbers are all digit runs.
fn mask_digits(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_digit() { '#' } else { c })
        .collect()
}
