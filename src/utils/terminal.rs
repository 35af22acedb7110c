//! Terminal output sanitization
//!
//! Prompts, branch names and project paths come straight from JSONL files written
//! by another program. They go through [`sanitize_line`] before the picker or the
//! `sessions` table prints them, so embedded escape sequences cannot move the
//! cursor, recolor the terminal or ring the bell.

/// Strips ANSI CSI and OSC escape sequences and control characters
///
/// Tabs, newlines and carriage returns survive; use [`sanitize_line`] when the
/// text has to fit on one row.
///
/// # Examples
///
/// ```
/// use ccshare::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI runs until its final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch == '\x1b' && chars.peek() == Some(&']') {
            chars.next();
            // OSC runs until BEL or ST (ESC \)
            while let Some(next_ch) = chars.next() {
                if next_ch == '\x07' {
                    break;
                }
                if next_ch == '\x1b' {
                    chars.next_if_eq(&'\\');
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitizes text for a single terminal row
///
/// Escape sequences are removed and every run of whitespace (including line
/// breaks) collapses to one space.
pub fn sanitize_line(text: &str) -> String {
    strip_ansi_codes(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
