use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::choices::Choice;
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::utils::format_path_with_tilde;
use crate::utils::terminal::sanitize_line;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const PROJECT: Color = Color::Rgb(217, 70, 239);
const BRANCH: Color = Color::Rgb(34, 211, 238);
const ERROR: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Borrowed view of the app state needed for one frame
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

pub fn render_ui(frame: &mut Frame, choices: &[&Choice], selected_idx: usize, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state.search_query);
    render_session_list(frame, layout.list_area, choices, selected_idx);
    render_detail(frame, layout.detail_area, choices.get(selected_idx).copied());
    render_status_bar(frame, layout.status_area, choices.len(), selected_idx, state);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)).title(title)
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str) {
    let line = Line::from(vec![
        Span::styled("› ", Style::default().fg(ACCENT)),
        Span::raw(query.to_string()),
        Span::styled("▏", Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line).block(bordered(" Select a session to share ")), area);
}

/// Two rows per session: header (project, size, date, branch) and prompt
fn choice_lines(choice: &Choice) -> Text<'static> {
    let entry = &choice.entry;
    let mut header = vec![
        Span::styled(sanitize_line(&choice.project), Style::default().fg(PROJECT)),
        Span::styled(format!("  {} msgs", entry.message_count), Style::default().fg(MUTED)),
        Span::styled(format!("  {}", format_timestamp(&entry.modified)), Style::default().fg(MUTED)),
    ];
    let branch = sanitize_line(&entry.git_branch);
    if !branch.is_empty() {
        header.push(Span::styled(format!("  [{}]", branch), Style::default().fg(BRANCH)));
    }

    let prompt = if choice.prompt.is_empty() {
        Span::styled("(no prompt)", Style::default().fg(MUTED))
    } else {
        Span::raw(sanitize_line(&choice.prompt))
    };

    Text::from(vec![
        Line::from(header),
        Line::from(vec![Span::styled("  → ", Style::default().fg(MUTED)), prompt]),
    ])
}

fn render_session_list(frame: &mut Frame, area: Rect, choices: &[&Choice], selected_idx: usize) {
    let items: Vec<ListItem> = choices.iter().map(|choice| ListItem::new(choice_lines(choice))).collect();

    let list = List::new(items).block(bordered(" Sessions ")).highlight_style(
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD),
    );

    let selected = if choices.is_empty() { None } else { Some(selected_idx) };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, choice: Option<&Choice>) {
    let content = match choice {
        Some(choice) => {
            let entry = &choice.entry;
            let label = |name: &'static str| Span::styled(name, Style::default().fg(MUTED));

            let mut lines = vec![
                Line::from(vec![label("Session: "), Span::raw(sanitize_line(&entry.session_id))]),
                Line::from(vec![
                    label("Project: "),
                    Span::raw(sanitize_line(&format_path_with_tilde(Path::new(&entry.project_path)))),
                ]),
                Line::from(vec![label("Created: "), Span::raw(format_timestamp(&entry.created))]),
                Line::from(vec![label("Updated: "), Span::raw(format_timestamp(&entry.modified))]),
                Line::from(vec![label("Messages: "), Span::raw(entry.message_count.to_string())]),
            ];
            if !entry.git_branch.is_empty() {
                lines.push(Line::from(vec![label("Branch: "), Span::raw(sanitize_line(&entry.git_branch))]));
            }
            if !entry.summary.is_empty() {
                lines.push(Line::from(vec![label("Summary: "), Span::raw(sanitize_line(&entry.summary))]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(sanitize_line(&entry.first_prompt)));

            Text::from(lines)
        }
        None => Text::from("No session selected"),
    };

    let paragraph = Paragraph::new(content).block(bordered(" Details ")).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    matched_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let base = Style::default().fg(BRIGHT).bg(STATUS_BG);

    let (text, style) = if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", msg.text), base.fg(fg))
    } else if matched_count == 0 {
        (" No matching sessions | Esc: clear | Ctrl+C: quit ".to_string(), base)
    } else {
        let mut parts = Vec::new();
        if matched_count < state.total_count {
            parts.push(format!("{}/{} sessions", matched_count, state.total_count));
        } else {
            parts.push(format!("{} sessions", state.total_count));
        }
        parts.push(format!("{}/{}", selected_idx + 1, matched_count));
        parts.push("Enter: share".to_string());
        parts.push("Ctrl+Y: copy id".to_string());
        parts.push(if state.search_query.is_empty() { "Esc: quit" } else { "Esc: clear" }.to_string());
        (format!(" {} ", parts.join(" | ")), base)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
