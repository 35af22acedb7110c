use std::collections::HashMap;

use crate::models::{ContentBlock, Session, SessionMessage, ToolResultContent};

/// A `tool_result` block found in a session, with the message carrying it
#[derive(Debug, Clone, Copy)]
pub struct ToolResultRef<'a> {
    pub message: &'a SessionMessage,
    pub content: &'a ToolResultContent,
    pub is_error: bool,
}

/// Lookup tables for the back-references inside a session
///
/// Messages point at their parent through `parent_uuid` and tool results
/// point at their tool use through `tool_use_id`. Both are plain ids that may
/// dangle (compacted or truncated logs), so they are resolved here once
/// instead of being followed as references.
#[derive(Debug)]
pub struct SessionLinks<'a> {
    messages: &'a [SessionMessage],
    by_uuid: HashMap<&'a str, usize>,
    results: HashMap<&'a str, ToolResultRef<'a>>,
}

impl<'a> SessionLinks<'a> {
    pub fn build(session: &'a Session) -> Self {
        let messages = session.messages.as_slice();
        let mut by_uuid = HashMap::with_capacity(messages.len());
        let mut results = HashMap::new();

        for (index, message) in messages.iter().enumerate() {
            by_uuid.entry(message.uuid.as_str()).or_insert(index);

            for block in message.content.blocks() {
                match block {
                    ContentBlock::ToolResult { tool_use_id, content, is_error } => {
                        // Last result wins when a tool use is answered twice
                        results.insert(
                            tool_use_id.as_str(),
                            ToolResultRef { message, content, is_error: is_error.unwrap_or(false) },
                        );
                    }
                    ContentBlock::Text { .. }
                    | ContentBlock::Thinking { .. }
                    | ContentBlock::ToolUse { .. } => {}
                }
            }
        }

        Self { messages, by_uuid, results }
    }

    pub fn get(&self, uuid: &str) -> Option<&'a SessionMessage> {
        self.by_uuid.get(uuid).map(|&index| &self.messages[index])
    }

    /// The parent of `message`, or `None` for roots and orphans
    pub fn parent(&self, message: &SessionMessage) -> Option<&'a SessionMessage> {
        message.parent_uuid.as_deref().and_then(|uuid| self.get(uuid))
    }

    pub fn tool_result(&self, tool_use_id: &str) -> Option<ToolResultRef<'a>> {
        self.results.get(tool_use_id).copied()
    }

    /// Messages whose parent id does not resolve within the session
    pub fn orphans(&self) -> impl Iterator<Item = &'a SessionMessage> + '_ {
        let messages: &'a [SessionMessage] = self.messages;
        messages.iter().filter(move |message| {
            message.parent_uuid.as_deref().is_some_and(|uuid| !self.by_uuid.contains_key(uuid))
        })
    }
}
