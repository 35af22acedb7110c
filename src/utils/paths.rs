use std::env;
use std::path::{Path, PathBuf};

/// Directory under the Claude directory that holds one folder per project
const PROJECTS_DIR_NAME: &str = "projects";

/// Name of the precomputed per-project index written by Claude Code
pub const SESSIONS_INDEX_FILENAME: &str = "sessions-index.json";

/// Root directory under which all projects are stored (`<claude_dir>/projects`)
pub fn projects_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join(PROJECTS_DIR_NAME)
}

/// Maps a project path to Claude's project directory name
///
/// Every `/` and `.` becomes `-`. The mapping is one-way and lossy:
/// `/foo/bar` and `/foo.bar` land in the same directory.
///
/// # Examples
///
/// ```
/// use ccshare::project_dir_name;
///
/// assert_eq!(project_dir_name("/Users/foo/my.app"), "-Users-foo-my-app");
/// ```
pub fn project_dir_name(project_path: &str) -> String {
    project_path.replace(['/', '.'], "-")
}

/// Storage directory for a project's session files
pub fn project_dir(claude_dir: &Path, project_path: &str) -> PathBuf {
    projects_dir(claude_dir).join(project_dir_name(project_path))
}

/// Expected location of a project's `sessions-index.json`
pub fn sessions_index_path(claude_dir: &Path, project_path: &str) -> PathBuf {
    project_dir(claude_dir, project_path).join(SESSIONS_INDEX_FILENAME)
}

/// Best-effort reverse of [`project_dir_name`]
///
/// Not a bijection: every `-` is read back as `/`, so dots and literal dashes
/// in the original path are lost. Only used when no index file records the
/// original path.
///
/// # Examples
///
/// ```
/// use ccshare::guess_project_path;
///
/// assert_eq!(guess_project_path("-Users-foo-bar"), "/Users/foo/bar");
/// ```
pub fn guess_project_path(dir_name: &str) -> String {
    dir_name.replace('-', "/")
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use ccshare::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home.filter(|home| !home.is_empty())
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    path.to_string_lossy().into_owned()
}
