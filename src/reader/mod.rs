//! Reading one session log into normalized messages
//!
//! [`read_session`] never fails: a log file that is gone by the time it is
//! read yields a session with no messages, logged at `debug` level.
//! [`SessionLinks`] resolves parent and tool-result ids after the fact.

pub mod links;
pub mod session;

pub use links::{SessionLinks, ToolResultRef};
pub use session::read_session;
