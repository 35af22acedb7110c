use crate::models::{RawRecord, RecordKind, Role, SessionMessage, TokenUsage};
use crate::utils::text::take_chars;

/// Maximum length of a first-prompt preview, in characters
pub const FIRST_PROMPT_MAX_CHARS: usize = 200;

/// Parse one log line into a record
///
/// Returns `None` for blank lines and for anything that is not a JSON object;
/// callers skip those lines and keep scanning. A leading byte-order mark is
/// ignored.
pub fn parse_record(line: &str) -> Option<RawRecord> {
    let line = line.trim().trim_start_matches('\u{feff}');
    // Records are always objects; serde would otherwise accept arrays as structs
    if !line.starts_with('{') {
        return None;
    }

    match serde_json::from_str::<RawRecord>(line) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::trace!(error = %e, "skipping undecodable log line");
            None
        }
    }
}

impl RawRecord {
    pub fn is_snapshot(&self) -> bool {
        self.kind == RecordKind::FileHistorySnapshot
    }

    /// Whether this record increments a session's message count
    ///
    /// Every decoded record except file-history snapshots counts, with or
    /// without a message payload.
    pub fn counts_as_message(&self) -> bool {
        !self.is_snapshot()
    }

    /// Normalize into a [`SessionMessage`]
    ///
    /// `None` for snapshots, records without a (non-empty) payload and records
    /// missing their `uuid` or `timestamp`.
    pub fn into_message(self) -> Option<SessionMessage> {
        if self.is_snapshot() {
            return None;
        }
        let is_sidechain = self.is_sidechain();
        let message = self.message?;
        if message.content.is_empty() {
            return None;
        }
        let uuid = self.uuid?;
        let timestamp = self.timestamp?;

        let (model, stop_reason, usage) = match message.role {
            Role::Assistant => (
                message.model,
                message.stop_reason,
                message.usage.map(|usage| TokenUsage {
                    input_tokens: usage.input_tokens,
                    output_tokens: usage.output_tokens,
                }),
            ),
            Role::User => (None, None, None),
        };

        Some(SessionMessage {
            uuid,
            parent_uuid: self.parent_uuid,
            timestamp,
            is_sidechain,
            role: message.role,
            content: message.content,
            model,
            stop_reason,
            usage,
        })
    }

    /// First-prompt preview if this is a user record with non-empty content
    ///
    /// String content gives its first 200 characters; block content gives the
    /// first 200 characters of the first `text` block, or an empty string when
    /// there is none. Markup is left as is. `None` means the record does not
    /// decide the preview and the next one should be tried.
    pub fn first_prompt(&self) -> Option<String> {
        if self.kind != RecordKind::User {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.content.is_empty() {
            return None;
        }
        Some(
            message
                .content
                .first_text()
                .map(|text| take_chars(text, FIRST_PROMPT_MAX_CHARS))
                .unwrap_or_default(),
        )
    }
}
