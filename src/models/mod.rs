//! Data models for Claude Code session logs.
//!
//! - [`RawRecord`] - one line of a session `.jsonl` file, as written by Claude Code
//! - [`MessageContent`] / [`ContentBlock`] - string or typed-block message content
//! - [`SessionEntry`] - lightweight per-session summary (the `sessions-index.json` shape)
//! - [`Session`] / [`SessionMessage`] - a fully read session with normalized messages
//!
//! Field names on the serialized side follow Claude Code's camelCase JSON so that the
//! index file, `ccshare show` output and the share server all speak the same shape.

pub mod content;
pub mod record;
pub mod session;

pub use content::{ContentBlock, ImageSource, MessageContent, ToolResultContent, ToolResultPart};
pub use record::{RawMessage, RawRecord, RawUsage, RecordKind};
pub use session::{
    ListSessionsOptions, ReadSessionOptions, Role, Session, SessionEntry, SessionMessage,
    SessionsIndex, SharedSession, TokenUsage,
};
