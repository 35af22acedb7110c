//! Line-level parsing of Claude Code session logs
//!
//! # Error Handling Strategy
//!
//! Session logs are append-only files written by a running (and versioned-over-time)
//! Claude Code process, so this module never fails on data:
//!
//! - **Individual line failures**: a line that is not a JSON object, or not valid UTF-8,
//!   is skipped and logged at `trace` level. Scanning always continues.
//!
//! - **Partial records**: fields that are present but malformed (`message`, `timestamp`)
//!   are treated as absent, so the record still contributes to session summaries.
//!
//! - **Unknown shapes**: unknown record kinds decode as [`RecordKind::Other`] and unknown
//!   content blocks are dropped.
//!
//! Only opening the file can fail, and callers decide what a missing file means.
//!
//! [`RecordKind::Other`]: crate::models::RecordKind::Other

pub mod deserializers;
pub mod log;
pub mod record;

pub use log::read_records;
pub use record::{FIRST_PROMPT_MAX_CHARS, parse_record};
