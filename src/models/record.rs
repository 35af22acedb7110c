use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::content::MessageContent;
use super::session::Role;

/// Record kind taken from a log line's `type` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    User,
    Assistant,
    FileHistorySnapshot,
    /// `summary`, `system`, `progress` and anything newer
    #[default]
    #[serde(other)]
    Other,
}

/// One physical line of a session log
///
/// Every field is optional so that any JSON object decodes; whether the
/// record is usable is decided afterwards by the record parser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub parent_uuid: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "isSidechain", default)]
    pub sidechain: Option<bool>,
    #[serde(default)]
    pub git_branch: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<RawMessage>,
}

/// Embedded API message carried by user/assistant records
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub role: Role,
    pub content: MessageContent,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<RawUsage>,
}

impl RawRecord {
    pub fn is_sidechain(&self) -> bool {
        self.sidechain.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}
