use crate::models::{ReadSessionOptions, Session, SessionEntry, SessionMessage};
use crate::parsers::read_records;

/// Load one session's messages from its log file, in file order
///
/// Undecodable lines and records that carry no message are skipped, as are
/// sidechain records unless `include_sidechain_messages` is set. A missing or
/// unreadable log file gives a session with no messages; the summary fields
/// are always copied from `entry`.
pub fn read_session(entry: &SessionEntry, options: &ReadSessionOptions) -> Session {
    let messages = match read_records(&entry.full_path) {
        Ok(records) => records
            .filter(|record| options.include_sidechain_messages || !record.is_sidechain())
            .filter_map(|record| record.into_message())
            .collect(),
        Err(e) => {
            tracing::debug!(
                path = %entry.full_path.display(),
                error = %e,
                "cannot open session log, returning no messages"
            );
            Vec::<SessionMessage>::new()
        }
    };

    Session { entry: entry.clone(), messages }
}
