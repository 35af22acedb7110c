//! Session discovery for Claude Code projects
//!
//! # Error Handling Strategy
//!
//! Listing never fails. Each project directory is served by the first
//! [`EntrySource`] that applies to it:
//!
//! - **Index file**: `sessions-index.json`, when present and decodable. A corrupt
//!   index is logged at `debug` level and treated as absent.
//!
//! - **Log scan**: otherwise every `*.jsonl` log is read in one pass. Unreadable
//!   files are skipped and logged; undecodable lines are skipped by the parser.
//!
//! - **Missing directories**: a project or projects directory that does not exist
//!   (or vanished between discovery and listing) yields an empty list.
//!
//! Results are rebuilt from the filesystem on every call; nothing is cached.

pub mod index_file;
pub mod project_discovery;
pub mod scanner;
pub mod sessions;

pub use index_file::{IndexFileSource, read_sessions_index};
pub use project_discovery::list_projects;
pub use scanner::{LogScanSource, summarize_log_file};
pub use sessions::{EntrySource, find_session, list_all_sessions, list_sessions};
