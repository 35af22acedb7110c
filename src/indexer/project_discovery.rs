use std::fs;
use std::path::Path;

use super::index_file::read_sessions_index;
use super::scanner::find_log_files;
use crate::utils::paths::{guess_project_path, projects_dir};

/// Discover every project with stored sessions under `<claude_dir>/projects`
///
/// A project directory's path comes from its index file's `originalPath` when
/// present. Otherwise the directory name is reverse-mapped with
/// [`guess_project_path`], which is lossy: a `-` that was originally a `.` or
/// part of a name comes back as `/`. Directories with neither an index path
/// nor any `*.jsonl` log are not projects and are left out.
///
/// Returns a sorted, de-duplicated list. A missing projects directory gives
/// an empty list.
pub fn list_projects(claude_dir: &Path) -> Vec<String> {
    let root = projects_dir(claude_dir);
    let entries = match fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %root.display(), error = %e, "cannot read projects directory");
            }
            return Vec::new();
        }
    };

    let mut projects: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| project_path_for_dir(&path))
        .collect();

    projects.sort();
    projects.dedup();
    projects
}

fn project_path_for_dir(dir: &Path) -> Option<String> {
    if let Some(index) = read_sessions_index(dir)
        && !index.original_path.is_empty()
    {
        return Some(index.original_path);
    }

    if find_log_files(dir).is_empty() {
        return None;
    }

    let dir_name = dir.file_name()?.to_string_lossy();
    Some(guess_project_path(&dir_name))
}
