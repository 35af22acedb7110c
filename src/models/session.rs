use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::MessageContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Lightweight summary of one session, as stored in `sessions-index.json`
///
/// The index-file reader and the log scanner both produce this exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub session_id: String,
    pub full_path: PathBuf,
    /// Log file modification time, milliseconds since the Unix epoch
    #[serde(default)]
    pub file_mtime: i64,
    #[serde(default)]
    pub first_prompt: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub message_count: usize,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub git_branch: String,
    #[serde(default)]
    pub project_path: String,
    #[serde(default)]
    pub is_sidechain: bool,
}

/// On-disk `sessions-index.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsIndex {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub original_path: String,
    #[serde(default)]
    pub entries: Vec<SessionEntry>,
}

/// Token counts reported for an assistant turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Normalized chat message
///
/// `model`, `stop_reason` and `usage` are only ever set on assistant messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessage {
    pub uuid: String,
    pub parent_uuid: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub is_sidechain: bool,
    pub role: Role,
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// A session's summary fields plus its messages in log-file order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(flatten)]
    pub entry: SessionEntry,
    pub messages: Vec<SessionMessage>,
}

/// What the share server publishes: a session minus local filesystem paths
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSession<'a> {
    pub session_id: &'a str,
    pub first_prompt: &'a str,
    pub summary: &'a str,
    pub message_count: usize,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub git_branch: &'a str,
    pub is_sidechain: bool,
    pub messages: &'a [SessionMessage],
}

impl<'a> From<&'a Session> for SharedSession<'a> {
    fn from(session: &'a Session) -> Self {
        let entry = &session.entry;
        Self {
            session_id: &entry.session_id,
            first_prompt: &entry.first_prompt,
            summary: &entry.summary,
            message_count: entry.message_count,
            created: entry.created,
            modified: entry.modified,
            git_branch: &entry.git_branch,
            is_sidechain: entry.is_sidechain,
            messages: &session.messages,
        }
    }
}

/// Options for [`crate::list_sessions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSessionsOptions {
    /// Drop sessions with zero messages
    pub filter_empty: bool,
    /// Keep sidechain sessions
    pub include_sidechains: bool,
}

impl Default for ListSessionsOptions {
    fn default() -> Self {
        Self { filter_empty: true, include_sidechains: false }
    }
}

/// Options for [`crate::read_session`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSessionOptions {
    /// Keep messages flagged as sidechain
    pub include_sidechain_messages: bool,
}
