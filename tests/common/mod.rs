//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ccshare::project_dir_name;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary home directory containing `.claude/projects/...`
pub struct ClaudeDirBuilder {
    home: TempDir,
}

impl ClaudeDirBuilder {
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(home.path().join(".claude")).expect("Failed to create .claude");
        Self { home }
    }

    /// The fake `$HOME`
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// The `.claude` directory inside the fake home
    pub fn claude_dir(&self) -> PathBuf {
        self.home.path().join(".claude")
    }

    /// Directory that holds the sessions of `project_path`
    pub fn project_dir(&self, project_path: &str) -> PathBuf {
        self.claude_dir().join("projects").join(project_dir_name(project_path))
    }

    /// Add log files for a project (the directory name is derived from the path)
    pub fn with_project(self, project_path: &str, logs: &[LogFileBuilder]) -> Self {
        let dir = self.project_dir(project_path);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        for log in logs {
            log.create_in(&dir);
        }
        self
    }

    /// Write a `sessions-index.json` for a project
    pub fn with_index(self, project_path: &str, entries: Value) -> Self {
        let dir = self.project_dir(project_path);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        let index = json!({ "version": 1, "originalPath": project_path, "entries": entries });
        fs::write(dir.join("sessions-index.json"), index.to_string()).expect("Failed to write index");
        self
    }

    /// Write raw bytes as `sessions-index.json`
    pub fn with_raw_index(self, project_path: &str, content: &str) -> Self {
        let dir = self.project_dir(project_path);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join("sessions-index.json"), content).expect("Failed to write index");
        self
    }

    pub fn build(self) -> TempDir {
        self.home
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `<session>.jsonl` log
pub struct LogFileBuilder {
    file_name: String,
    lines: Vec<String>,
}

impl LogFileBuilder {
    pub fn new(session_id: &str) -> Self {
        Self { file_name: format!("{session_id}.jsonl"), lines: Vec::new() }
    }

    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a line verbatim (malformed data, snapshots, ...)
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn snapshot(self) -> Self {
        self.raw_line(
            r#"{"type":"file-history-snapshot","messageId":"m1","snapshot":{"trackedFileBackups":{}},"isSnapshotUpdate":false}"#,
        )
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    fn create_in(&self, dir: &Path) {
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(self.path_in(dir), content).expect("Failed to write log file");
    }
}

/// Builder for one user/assistant log record
pub struct RecordBuilder {
    kind: &'static str,
    uuid: String,
    parent_uuid: Option<String>,
    session_id: String,
    timestamp: String,
    sidechain: bool,
    git_branch: Option<String>,
    content: Value,
}

impl RecordBuilder {
    pub fn user(session_id: &str, uuid: &str, text: &str) -> Self {
        Self {
            kind: "user",
            uuid: uuid.to_string(),
            parent_uuid: None,
            session_id: session_id.to_string(),
            timestamp: "2025-01-15T10:00:00.000Z".to_string(),
            sidechain: false,
            git_branch: None,
            content: Value::String(text.to_string()),
        }
    }

    pub fn assistant(session_id: &str, uuid: &str, text: &str) -> Self {
        Self {
            kind: "assistant",
            content: json!([{ "type": "text", "text": text }]),
            ..Self::user(session_id, uuid, "")
        }
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn parent(mut self, uuid: &str) -> Self {
        self.parent_uuid = Some(uuid.to_string());
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.git_branch = Some(branch.to_string());
        self
    }

    pub fn sidechain(mut self) -> Self {
        self.sidechain = true;
        self
    }

    pub fn blocks(mut self, blocks: Value) -> Self {
        self.content = blocks;
        self
    }

    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.kind,
            "uuid": self.uuid,
            "parentUuid": self.parent_uuid,
            "sessionId": self.session_id,
            "timestamp": self.timestamp,
            "isSidechain": self.sidechain,
            "cwd": "/work",
            "version": "1.0.0",
            "message": { "role": self.kind, "content": self.content },
        });
        if let Some(branch) = &self.git_branch {
            record["gitBranch"] = Value::String(branch.clone());
        }
        record.to_string()
    }
}

/// Index entry JSON for `with_index`
pub fn index_entry(session_id: &str, full_path: &Path, modified: &str, message_count: usize) -> Value {
    json!({
        "sessionId": session_id,
        "fullPath": full_path,
        "fileMtime": 1736935200000_i64,
        "firstPrompt": format!("prompt of {session_id}"),
        "summary": format!("Summary {session_id}"),
        "messageCount": message_count,
        "created": "2025-01-01T00:00:00.000Z",
        "modified": modified,
        "gitBranch": "main",
        "projectPath": "/work",
        "isSidechain": false,
    })
}
