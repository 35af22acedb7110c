use serde_json::Value;

use crate::utils::text::take_chars;

const BASH_SUMMARY_CHARS: usize = 50;

/// One-line label for a tool invocation
///
/// File tools show the last two path segments, search tools their pattern,
/// `Bash` the start of its command. Anything else is just the tool name.
pub fn tool_summary(name: &str, input: &Value) -> String {
    let field = |key: &str| input.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());

    match name {
        "Read" | "Edit" | "Write" => match field("file_path") {
            Some(path) => format!("{name}: {}", short_path(path)),
            None => name.to_string(),
        },
        "Grep" | "Glob" => match field("pattern") {
            Some(pattern) => format!("{name}: {pattern}"),
            None => name.to_string(),
        },
        "Bash" => match field("command") {
            Some(command) if command.chars().count() > BASH_SUMMARY_CHARS => {
                format!("Bash: {}...", take_chars(command, BASH_SUMMARY_CHARS))
            }
            Some(command) => format!("Bash: {command}"),
            None => name.to_string(),
        },
        _ => name.to_string(),
    }
}

fn short_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    segments[segments.len().saturating_sub(2)..].join("/")
}
