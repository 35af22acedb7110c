use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use super::sessions::EntrySource;
use crate::models::SessionEntry;
use crate::parsers::read_records;

const LOG_EXTENSION: &str = "jsonl";

/// Fallback path: rebuild entries by reading every log file in the project
pub struct LogScanSource;

impl EntrySource for LogScanSource {
    fn name(&self) -> &'static str {
        "log-scan"
    }

    fn load(&self, project_dir: &Path, project_path: &str) -> Option<Vec<SessionEntry>> {
        Some(
            find_log_files(project_dir)
                .iter()
                .filter_map(|path| summarize_log_file(path, project_path))
                .collect(),
        )
    }
}

/// `*.jsonl` files directly inside `project_dir`, sorted by file name
///
/// A missing or unreadable directory yields an empty list.
pub fn find_log_files(project_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(project_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == LOG_EXTENSION))
        .collect()
}

/// Running state of a single pass over one log file
#[derive(Debug, Default)]
struct ScanAccumulator {
    session_id: Option<String>,
    first_prompt: Option<String>,
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
    git_branch: Option<String>,
    is_sidechain: bool,
    message_count: usize,
}

impl ScanAccumulator {
    fn observe(&mut self, record: &crate::models::RawRecord) {
        if self.session_id.is_none()
            && let Some(id) = record.session_id.as_deref().filter(|id| !id.is_empty())
        {
            self.session_id = Some(id.to_string());
        }

        if let Some(ts) = record.timestamp {
            self.created = Some(self.created.map_or(ts, |created| created.min(ts)));
            self.modified = Some(self.modified.map_or(ts, |modified| modified.max(ts)));
        }

        if self.git_branch.is_none()
            && let Some(branch) = record.git_branch.as_deref().filter(|b| !b.is_empty())
        {
            self.git_branch = Some(branch.to_string());
        }

        self.is_sidechain |= record.is_sidechain();

        // Decided by the first user record with content, text or not
        if self.first_prompt.is_none() {
            self.first_prompt = record.first_prompt();
        }

        if record.counts_as_message() {
            self.message_count += 1;
        }
    }
}

/// Build a [`SessionEntry`] from one full pass over a log file
///
/// Returns `None` when the file cannot be opened or stat'ed.
pub fn summarize_log_file(path: &Path, project_path: &str) -> Option<SessionEntry> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable log file");
            return None;
        }
    };
    let records = match read_records(path) {
        Ok(records) => records,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable log file");
            return None;
        }
    };

    let mut acc = ScanAccumulator::default();
    for record in records {
        acc.observe(&record);
    }

    let file_modified = metadata.modified().ok();
    // Birth time is not available on every filesystem
    let file_created = metadata.created().ok().or(file_modified);
    let fallback_created = file_created.map(to_datetime).unwrap_or_default();
    let fallback_modified = file_modified.map(to_datetime).unwrap_or(fallback_created);

    let created = acc.created.unwrap_or(fallback_created);
    let modified = acc.modified.unwrap_or(fallback_modified).max(created);

    let session_id = acc.session_id.unwrap_or_else(|| {
        path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
    });

    Some(SessionEntry {
        session_id,
        full_path: path.to_path_buf(),
        file_mtime: file_modified.map(|t| to_datetime(t).timestamp_millis()).unwrap_or_default(),
        first_prompt: acc.first_prompt.unwrap_or_default(),
        summary: String::new(),
        message_count: acc.message_count,
        created,
        modified,
        git_branch: acc.git_branch.unwrap_or_default(),
        project_path: project_path.to_string(),
        is_sidechain: acc.is_sidechain,
    })
}

fn to_datetime(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
