use std::collections::HashSet;
use std::path::Path;

use super::index_file::IndexFileSource;
use super::project_discovery::list_projects;
use super::scanner::LogScanSource;
use crate::models::{ListSessionsOptions, SessionEntry};
use crate::utils::paths::project_dir;

/// A way of producing the session entries of one project directory
///
/// `load` returns `None` when the source does not apply to the directory,
/// letting the caller fall through to the next source.
pub trait EntrySource {
    fn name(&self) -> &'static str;

    fn load(&self, project_dir: &Path, project_path: &str) -> Option<Vec<SessionEntry>>;
}

/// Raw entries for a project, before filtering and ordering
///
/// The index file wins when it parses; otherwise every log file is scanned.
/// The choice is made fresh on each call.
pub fn load_entries(claude_dir: &Path, project_path: &str) -> Vec<SessionEntry> {
    let dir = project_dir(claude_dir, project_path);
    let sources: [&dyn EntrySource; 2] = [&IndexFileSource, &LogScanSource];

    for source in sources {
        if let Some(entries) = source.load(&dir, project_path) {
            tracing::debug!(
                project = project_path,
                source = source.name(),
                count = entries.len(),
                "loaded session entries"
            );
            return entries;
        }
    }

    Vec::new()
}

/// List a project's sessions, newest `modified` first
///
/// Never fails: a missing project directory yields an empty list, a corrupt
/// index falls back to scanning, and unreadable log files are skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ccshare::{ListSessionsOptions, list_sessions};
///
/// let sessions = list_sessions(
///     Path::new("/home/alice/.claude"),
///     "/home/alice/code/app",
///     &ListSessionsOptions::default(),
/// );
/// for entry in sessions {
///     println!("{} {}", entry.session_id, entry.first_prompt);
/// }
/// ```
pub fn list_sessions(
    claude_dir: &Path,
    project_path: &str,
    options: &ListSessionsOptions,
) -> Vec<SessionEntry> {
    finish_entries(load_entries(claude_dir, project_path), options)
}

/// Filtering, ordering and de-duplication shared by every entry source
pub fn finish_entries(
    entries: Vec<SessionEntry>,
    options: &ListSessionsOptions,
) -> Vec<SessionEntry> {
    let mut entries: Vec<SessionEntry> = entries
        .into_iter()
        .filter(|entry| options.include_sidechains || !entry.is_sidechain)
        .filter(|entry| !options.filter_empty || entry.message_count > 0)
        .collect();

    // Stable, so ties keep source order
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));

    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.session_id.clone()));
    entries
}

/// Sessions of every known project, newest first
pub fn list_all_sessions(claude_dir: &Path, options: &ListSessionsOptions) -> Vec<SessionEntry> {
    let mut entries: Vec<SessionEntry> = list_projects(claude_dir)
        .iter()
        .flat_map(|project| list_sessions(claude_dir, project, options))
        .collect();
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    entries
}

/// Look a session id up across all projects
///
/// Sidechain and empty sessions are included so any id on disk can be found.
pub fn find_session(claude_dir: &Path, session_id: &str) -> Option<SessionEntry> {
    let options = ListSessionsOptions { filter_empty: false, include_sidechains: true };
    list_projects(claude_dir)
        .iter()
        .flat_map(|project| list_sessions(claude_dir, project, &options))
        .find(|entry| entry.session_id == session_id)
}
