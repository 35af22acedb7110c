//! Character-aware text helpers shared by the indexer, picker and renderer

/// First `max_chars` characters of `text` (never splits a UTF-8 sequence)
pub fn take_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Truncates to at most `max_chars` characters, ending with `...` when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut = take_chars(text, max_chars.saturating_sub(3));
    cut.push_str("...");
    cut
}

/// Removes `<tag>`-style markup and collapses whitespace
///
/// Claude Code wraps slash commands and reminders in pseudo-XML
/// (`<command-name>/clear</command-name>`); for previews only the text matters.
pub fn clean_prompt(prompt: &str) -> String {
    let mut stripped = String::with_capacity(prompt.len());
    let mut rest = prompt;

    while let Some(open) = rest.find('<') {
        stripped.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                // Lone `<` or `<>` is not a tag
                stripped.push('<');
                rest = after;
            }
        }
    }
    stripped.push_str(rest);

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
