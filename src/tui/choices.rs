use crate::models::SessionEntry;
use crate::utils::text::{clean_prompt, truncate};

/// Prompt previews in the list are cut to this many characters
pub const PROMPT_PREVIEW_CHARS: usize = 70;

/// One selectable row of the picker
#[derive(Debug, Clone)]
pub struct Choice {
    pub entry: SessionEntry,
    /// Project path with the prefix shared by all choices removed
    pub project: String,
    /// Cleaned, truncated first prompt; empty when the session has none
    pub prompt: String,
    /// Text the fuzzy matcher runs against
    pub search_text: String,
}

/// Longest run of leading `/`-separated segments shared by every path
pub fn common_path_prefix<'a>(paths: impl IntoIterator<Item = &'a str>) -> String {
    let mut paths = paths.into_iter();
    let Some(first) = paths.next() else {
        return String::new();
    };

    let first_parts: Vec<&str> = first.split('/').collect();
    let mut prefix_len = first_parts.len();
    for path in paths {
        prefix_len = path
            .split('/')
            .zip(&first_parts[..prefix_len])
            .take_while(|(a, b)| a == *b)
            .count();
    }

    first_parts[..prefix_len].join("/")
}

/// Project label with `strip` (the shared prefix plus `/`) removed
fn project_label(project_path: &str, strip: &str) -> String {
    match project_path.strip_prefix(strip) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => project_path.to_string(),
    }
}

/// Turn entries into picker rows, keeping their order
pub fn build_choices(entries: Vec<SessionEntry>) -> Vec<Choice> {
    let prefix = common_path_prefix(entries.iter().map(|e| e.project_path.as_str()));
    let strip = if prefix.is_empty() { String::new() } else { format!("{prefix}/") };

    entries
        .into_iter()
        .map(|entry| {
            let project = project_label(&entry.project_path, &strip);
            let cleaned = clean_prompt(&entry.first_prompt);
            let search_text = [project.as_str(), cleaned.as_str(), entry.git_branch.as_str()]
                .join(" ")
                .to_lowercase();
            let prompt = truncate(&cleaned, PROMPT_PREVIEW_CHARS);
            Choice { entry, project, prompt, search_text }
        })
        .collect()
}
