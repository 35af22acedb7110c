//! ccshare - browse Claude Code sessions and share them as a web page
//!
//! Claude Code keeps every conversation as an append-only `.jsonl` log under
//! `~/.claude/projects/<mapped project path>/`, optionally alongside a
//! `sessions-index.json` summary. This library:
//!
//! - Discovers projects and lists their sessions, from the index file when it is
//!   valid and by scanning the raw logs otherwise
//! - Parses log lines leniently into a typed, normalized message model
//! - Renders a session to standalone HTML and serves it on a local port
//!
//! # Example
//!
//! ```no_run
//! use ccshare::{ListSessionsOptions, ReadSessionOptions, list_projects, list_sessions, read_session};
//! use std::path::PathBuf;
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! for project in list_projects(&claude_dir) {
//!     for entry in list_sessions(&claude_dir, &project, &ListSessionsOptions::default()) {
//!         let session = read_session(&entry, &ReadSessionOptions::default());
//!         println!("{}: {} messages", entry.session_id, session.messages.len());
//!     }
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod reader;
pub mod render;
pub mod server;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use indexer::{find_session, list_all_sessions, list_projects, list_sessions};
pub use models::{
    ContentBlock, ListSessionsOptions, MessageContent, ReadSessionOptions, Role, Session,
    SessionEntry, SessionMessage, SessionsIndex, SharedSession,
};
pub use reader::{SessionLinks, read_session};
pub use render::render_session_html;
pub use utils::paths::{format_path_with_tilde, guess_project_path, project_dir_name};
