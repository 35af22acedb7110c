//! Standalone HTML view of a session
//!
//! The share server serves this page as-is; it needs no scripts and no
//! network access. Markdown is rendered with `pulldown-cmark`, and every
//! piece of session text is escaped on the way out.

pub mod markdown;
pub mod tools;

use chrono::Local;
use serde_json::Value;

pub use markdown::{escape_html, markdown_to_html};
pub use tools::tool_summary;

use crate::models::{ContentBlock, MessageContent, Role, Session, SessionMessage};
use crate::reader::SessionLinks;

/// Tool results longer than this start collapsed
const RESULT_PREVIEW_LINES: usize = 3;

const SYSTEM_TAG_PREFIXES: &[&str] = &[
    "<local-command-caveat>",
    "<command-name>",
    "<local-command-stdout>",
    "<local-command-stderr>",
    "<system-reminder>",
];

const STYLE: &str = r#"
:root{color-scheme:light}
body{font-family:-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica,Arial,sans-serif;margin:0;background:#fff;color:#111;line-height:1.6}
header{border-bottom:1px solid #e5e7eb;padding:16px 24px}
header h1{margin:0 0 6px;font-size:20px;font-weight:600}
.meta{display:flex;flex-wrap:wrap;gap:16px;color:#6b7280;font-size:13px}
main{max-width:56rem;margin:0 auto;padding:24px 16px}
.msg{display:flex;gap:12px;margin:0 0 24px}
.msg.user{flex-direction:row-reverse}
.avatar{flex:none;width:32px;height:32px;border-radius:50%;background:#e5e7eb;display:flex;align-items:center;justify-content:center;font-size:12px;color:#4b5563}
.bubble{max-width:85%;background:#f3f4f6;border-radius:16px;padding:12px 16px;overflow-wrap:anywhere}
.bubble>*+*{margin-top:12px}
.system{display:flex;justify-content:center;margin:0 0 24px}
.system pre{font-size:12px;color:#9ca3af;background:#f9fafb;border:1px solid #e5e7eb;border-radius:8px;padding:8px 12px;max-width:80%;white-space:pre-wrap}
details,.result{border:1px solid #e5e7eb;border-radius:8px;background:#fff}
summary,.label{cursor:pointer;padding:6px 12px;font-size:13px;font-weight:500;color:#4b5563}
details>pre,details>div,.result>pre{margin:0;padding:12px 16px;border-top:1px solid #e5e7eb}
.thinking div{white-space:pre-wrap;font-size:14px;color:#374151}
.result{background:#f9fafb}
.result.error .label,.result.error summary{color:#b91c1c}
pre{font-family:ui-monospace,SFMono-Regular,Menlo,Consolas,monospace;font-size:12px;overflow-x:auto;white-space:pre-wrap}
pre code{background:none;padding:0}
code{background:#e5e7eb;border-radius:4px;padding:1px 5px;font-size:13px}
.bubble pre{background:#f9fafb;border:1px solid #e5e7eb;border-radius:8px;padding:12px}
table{border-collapse:collapse}th,td{border-top:1px solid #e5e7eb;padding:4px 10px;text-align:left}
"#;

/// Render a whole session as one HTML document
pub fn render_session_html(session: &Session) -> String {
    let links = SessionLinks::build(session);
    let entry = &session.entry;

    let title = if entry.summary.is_empty() { &entry.first_prompt } else { &entry.summary };
    let title = if title.is_empty() { entry.session_id.as_str() } else { title.as_str() };

    let mut body = String::new();
    for message in session.messages.iter().filter(|m| is_visible(m)) {
        body.push_str(&render_message(message, &links));
    }

    let branch = if entry.git_branch.is_empty() {
        String::new()
    } else {
        format!("<span>⎇ {}</span>", escape_html(&entry.git_branch))
    };

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head><body>\
         <header><h1>{title}</h1><div class=\"meta\">{branch}<span>{created}</span>\
         <span>{count} messages</span></div></header><main>{body}</main></body></html>",
        title = escape_html(title),
        created = entry.created.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        count = entry.message_count,
    )
}

fn is_system_text(text: &str) -> bool {
    let trimmed = text.trim_start();
    SYSTEM_TAG_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Messages made only of tool results are shown inline with their tool use
fn is_visible(message: &SessionMessage) -> bool {
    match &message.content {
        MessageContent::Text(text) => !text.trim().is_empty(),
        MessageContent::Blocks(blocks) => blocks.iter().any(|block| match block {
            ContentBlock::Text { text } => !text.trim().is_empty(),
            ContentBlock::Thinking { .. } | ContentBlock::ToolUse { .. } => true,
            ContentBlock::ToolResult { .. } => false,
        }),
    }
}

fn render_system(text: &str) -> String {
    format!("<div class=\"system\"><pre>{}</pre></div>", escape_html(text))
}

fn render_message(message: &SessionMessage, links: &SessionLinks<'_>) -> String {
    match &message.content {
        MessageContent::Text(text) if is_system_text(text) => return render_system(text),
        MessageContent::Blocks(blocks)
            if blocks
                .iter()
                .all(|b| matches!(b, ContentBlock::Text { text } if is_system_text(text))) =>
        {
            return blocks
                .iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => render_system(text),
                    ContentBlock::Thinking { .. }
                    | ContentBlock::ToolUse { .. }
                    | ContentBlock::ToolResult { .. } => String::new(),
                })
                .collect();
        }
        _ => {}
    }

    let inner = match &message.content {
        MessageContent::Text(text) => markdown_to_html(text),
        MessageContent::Blocks(blocks) => {
            blocks.iter().map(|block| render_block(block, links)).collect::<String>()
        }
    };

    let (class, avatar) = match message.role {
        Role::User => ("user", "You"),
        Role::Assistant => ("assistant", "AI"),
    };
    let model = message
        .model
        .as_deref()
        .map(|model| format!(" title=\"{}\"", escape_html(model)))
        .unwrap_or_default();

    format!(
        "<section class=\"msg {class}\" id=\"{id}\"><div class=\"avatar\"{model}>{avatar}</div>\
         <div class=\"bubble\">{inner}</div></section>",
        id = escape_html(&message.uuid),
    )
}

fn render_block(block: &ContentBlock, links: &SessionLinks<'_>) -> String {
    match block {
        ContentBlock::Text { text } if is_system_text(text) => render_system(text),
        ContentBlock::Text { text } => markdown_to_html(text),
        ContentBlock::Thinking { thinking, .. } => format!(
            "<details class=\"thinking\" open><summary>Thinking</summary><div>{}</div></details>",
            escape_html(thinking)
        ),
        ContentBlock::ToolUse { id, name, input } => {
            let mut out = format!(
                "<details class=\"tool\"><summary>{}</summary><pre>{}</pre></details>",
                escape_html(&tool_summary(name, input)),
                escape_html(&pretty_json(input)),
            );
            if let Some(result) = links.tool_result(id) {
                out.push_str(&render_tool_result(&result.content.to_text(), result.is_error));
            }
            out
        }
        // Shown next to the tool use that produced it
        ContentBlock::ToolResult { .. } => String::new(),
    }
}

fn render_tool_result(text: &str, is_error: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let class = if is_error { "result error" } else { "result" };
    let label = if is_error { "Error" } else { "Result" };
    let line_count = text.lines().count();

    if line_count > RESULT_PREVIEW_LINES {
        format!(
            "<details class=\"{class}\"><summary>{label} ({line_count} lines)</summary><pre>{}</pre></details>",
            escape_html(text)
        )
    } else {
        format!("<div class=\"{class}\"><div class=\"label\">{label}</div><pre>{}</pre></div>", escape_html(text))
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
