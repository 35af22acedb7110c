use std::fs;
use std::path::Path;

use super::sessions::EntrySource;
use crate::models::{SessionEntry, SessionsIndex};
use crate::utils::paths::SESSIONS_INDEX_FILENAME;

/// Read and decode a project's `sessions-index.json`
///
/// `None` when the file is missing, unreadable or not a valid index.
pub fn read_sessions_index(project_dir: &Path) -> Option<SessionsIndex> {
    let index_path = project_dir.join(SESSIONS_INDEX_FILENAME);
    let content = match fs::read_to_string(&index_path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %index_path.display(), error = %e, "cannot read sessions index");
            }
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::debug!(path = %index_path.display(), error = %e, "corrupt sessions index");
            None
        }
    }
}

/// Fast path: entries as declared by Claude Code's own index file
pub struct IndexFileSource;

impl EntrySource for IndexFileSource {
    fn name(&self) -> &'static str {
        "index-file"
    }

    fn load(&self, project_dir: &Path, _project_path: &str) -> Option<Vec<SessionEntry>> {
        read_sessions_index(project_dir).map(|index| index.entries)
    }
}
