/// Edge case integration tests
///
/// These tests cover filesystem quirks, data edge cases, and other unusual scenarios
mod common;

use std::fs;

use ccshare::{
    ContentBlock, ListSessionsOptions, MessageContent, ReadSessionOptions, find_session,
    list_projects, list_sessions, read_session,
};
use common::{ClaudeDirBuilder, LogFileBuilder, RecordBuilder, index_entry};
use serde_json::json;

const PROJECT: &str = "/work/app";

fn all_sessions() -> ListSessionsOptions {
    ListSessionsOptions { filter_empty: false, include_sidechains: true }
}

/// Write a log file verbatim, bypassing the line builder
fn write_raw_log(home: &ClaudeDirBuilder, file_name: &str, content: &[u8]) {
    let dir = home.project_dir(PROJECT);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), content).unwrap();
}

#[test]
fn test_edge_case_crlf_and_blank_lines() {
    let home = ClaudeDirBuilder::new();
    let user = RecordBuilder::user("s1", "u1", "first").to_json();
    let assistant = RecordBuilder::assistant("s1", "a1", "second").to_json();
    write_raw_log(&home, "s1.jsonl", format!("{user}\r\n\r\n   \n{assistant}\r\n").as_bytes());

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].message_count, 2);

    let session = read_session(&entries[0], &ReadSessionOptions::default());
    assert_eq!(session.messages.len(), 2);
}

#[test]
fn test_edge_case_no_trailing_newline() {
    let home = ClaudeDirBuilder::new();
    let user = RecordBuilder::user("s1", "u1", "first").to_json();
    let assistant = RecordBuilder::assistant("s1", "a1", "second").to_json();
    write_raw_log(&home, "s1.jsonl", format!("{user}\n{assistant}").as_bytes());

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].message_count, 2);
    assert_eq!(read_session(&entries[0], &ReadSessionOptions::default()).messages.len(), 2);
}

#[test]
fn test_edge_case_invalid_utf8_line_is_skipped() {
    let home = ClaudeDirBuilder::new();
    let mut content = RecordBuilder::user("s1", "u1", "first").into_bytes_line();
    content.extend_from_slice(b"\xff\xfe\xfd garbage\n");
    content.extend(RecordBuilder::assistant("s1", "a1", "second").into_bytes_line());
    write_raw_log(&home, "s1.jsonl", &content);

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].message_count, 2);
}

#[test]
fn test_edge_case_unicode_prompt_truncated_by_characters() {
    let prompt = "日本語のテキスト🎉".repeat(40);
    let home = ClaudeDirBuilder::new()
        .with_project(PROJECT, &[LogFileBuilder::new("s1").record(RecordBuilder::user("s1", "u1", &prompt))]);

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    let first_prompt = &entries[0].first_prompt;
    assert_eq!(first_prompt.chars().count(), 200);
    assert!(prompt.starts_with(first_prompt.as_str()));
}

#[test]
fn test_edge_case_first_prompt_skips_assistant_and_empty_user() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("s1")
            .record(RecordBuilder::assistant("s1", "a0", "I speak first"))
            .record(RecordBuilder::user("s1", "u0", ""))
            .record(RecordBuilder::user("s1", "u1", "real question"))],
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].first_prompt, "real question");
}

#[test]
fn test_edge_case_first_prompt_without_text_stays_empty() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("s1")
            .record(RecordBuilder::user("s1", "u1", "").blocks(json!([
                { "type": "tool_result", "tool_use_id": "t1", "content": "file contents" }
            ])))
            .record(RecordBuilder::user("s1", "u2", "later prompt"))],
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].first_prompt, "");
    assert_eq!(entries[0].message_count, 2);
}

#[test]
fn test_edge_case_unknown_blocks_are_dropped() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("s1")
            .record(RecordBuilder::user("s1", "u1", "").blocks(json!([
                { "type": "image", "source": { "type": "base64", "data": "AAAA" } },
                { "type": "text", "text": "look at this" }
            ])))
            .record(RecordBuilder::user("s1", "u2", "").blocks(json!([
                { "type": "server_side_widget", "payload": 1 }
            ])))],
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].first_prompt, "look at this");
    // The record with nothing decodable still counts, but yields no message
    assert_eq!(entries[0].message_count, 2);

    let session = read_session(&entries[0], &ReadSessionOptions::default());
    assert_eq!(session.messages.len(), 1);
    assert_eq!(
        session.messages[0].content,
        MessageContent::Blocks(vec![ContentBlock::Text { text: "look at this".into() }])
    );
}

#[test]
fn test_edge_case_metadata_records_count_but_are_not_messages() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("s1")
            .raw_line(r#"{"type":"summary","summary":"Fixing the build","leafUuid":"u1"}"#)
            .snapshot()
            .record(RecordBuilder::user("s1", "u1", "hello"))],
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries[0].message_count, 2);
    assert_eq!(read_session(&entries[0], &ReadSessionOptions::default()).messages.len(), 1);
}

#[test]
fn test_edge_case_session_id_from_file_name() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("abc-123").raw_line(r#"{"type":"summary","summary":"no ids here"}"#)],
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &all_sessions());
    assert_eq!(entries[0].session_id, "abc-123");
}

#[test]
fn test_edge_case_out_of_order_timestamps() {
    let home = ClaudeDirBuilder::new().with_project(
        PROJECT,
        &[LogFileBuilder::new("s1")
            .record(RecordBuilder::user("s1", "u1", "a").at("2025-03-02T00:00:00Z"))
            .record(RecordBuilder::assistant("s1", "a1", "b").at("2025-03-01T00:00:00Z"))
            .record(RecordBuilder::user("s1", "u2", "c").at("2025-03-03T00:00:00Z"))],
    );

    let entry = &list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default())[0];
    assert_eq!(entry.created.to_rfc3339(), "2025-03-01T00:00:00+00:00");
    assert_eq!(entry.modified.to_rfc3339(), "2025-03-03T00:00:00+00:00");
}

#[test]
fn test_edge_case_empty_log_file() {
    let home = ClaudeDirBuilder::new();
    write_raw_log(&home, "empty.jsonl", b"");

    assert!(list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default()).is_empty());

    let entries = list_sessions(&home.claude_dir(), PROJECT, &all_sessions());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message_count, 0);
    assert!(entries[0].first_prompt.is_empty());
    assert!(entries[0].created <= entries[0].modified);
}

#[test]
fn test_edge_case_non_log_files_are_ignored() {
    let home = ClaudeDirBuilder::new()
        .with_project(PROJECT, &[LogFileBuilder::new("s1").record(RecordBuilder::user("s1", "u1", "hi"))]);
    let dir = home.project_dir(PROJECT);
    fs::write(dir.join("notes.txt"), "not a log").unwrap();
    fs::write(dir.join("backup.jsonl.bak"), "{}").unwrap();
    fs::create_dir_all(dir.join("nested.jsonl")).unwrap();

    let entries = list_sessions(&home.claude_dir(), PROJECT, &all_sessions());
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_edge_case_index_entry_with_missing_log() {
    let home = ClaudeDirBuilder::new();
    let missing = home.project_dir(PROJECT).join("gone.jsonl");
    let home = home.with_index(
        PROJECT,
        json!([index_entry("gone", &missing, "2025-01-15T10:00:00.000Z", 12)]),
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries.len(), 1);

    let session = read_session(&entries[0], &ReadSessionOptions::default());
    assert!(session.messages.is_empty());
    assert_eq!(session.entry.message_count, 12);
}

#[test]
fn test_edge_case_duplicate_ids_keep_newest() {
    let home = ClaudeDirBuilder::new();
    let dir = home.project_dir(PROJECT);
    let home = home.with_index(
        PROJECT,
        json!([
            index_entry("dup", &dir.join("dup.jsonl"), "2025-01-01T00:00:00.000Z", 1),
            index_entry("dup", &dir.join("dup.jsonl"), "2025-02-01T00:00:00.000Z", 5),
            index_entry("other", &dir.join("other.jsonl"), "2025-01-15T00:00:00.000Z", 2),
        ]),
    );

    let entries = list_sessions(&home.claude_dir(), PROJECT, &ListSessionsOptions::default());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].session_id, "dup");
    assert_eq!(entries[0].message_count, 5);
}

#[test]
fn test_edge_case_index_original_path_wins_for_projects() {
    let home = ClaudeDirBuilder::new()
        .with_project("/work/my-app", &[LogFileBuilder::new("s1").record(RecordBuilder::user("s1", "u1", "hi"))])
        .with_index("/work/my-app", json!([]));

    // The dashed directory name alone is ambiguous; the index records the real path
    assert_eq!(list_projects(&home.claude_dir()), vec!["/work/my-app"]);
}

#[test]
fn test_edge_case_missing_claude_dir() {
    let home = ClaudeDirBuilder::new();
    let claude_dir = home.home().join("does-not-exist");

    assert!(list_projects(&claude_dir).is_empty());
    assert!(list_sessions(&claude_dir, PROJECT, &ListSessionsOptions::default()).is_empty());
    assert!(find_session(&claude_dir, "anything").is_none());
}

trait IntoBytesLine {
    fn into_bytes_line(self) -> Vec<u8>;
}

impl IntoBytesLine for RecordBuilder {
    fn into_bytes_line(self) -> Vec<u8> {
        let mut bytes = self.to_json().into_bytes();
        bytes.push(b'\n');
        bytes
    }
}
