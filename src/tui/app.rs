//! Picker state and event loop.
//!
//! - **Fuzzy search**: `nucleo` matches the query against each choice's search text
//!   (project, cleaned prompt, branch) as the user types
//! - **Selection**: Enter returns the highlighted session; Esc on an empty query,
//!   or Ctrl+C, cancels
//! - **Clipboard**: Ctrl+Y copies the highlighted session id, with transient feedback
//!   in the status bar
//! - **Dirty state tracking**: redraws only when state changes (plus a periodic
//!   redraw for terminal resizes)

use std::time::{Duration, Instant};

use anyhow::Result;
use nucleo::{Config, Nucleo};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::choices::Choice;
use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, LazySystemClipboard, copy_session_id};
use crate::models::SessionEntry;

const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
const STATUS_ERROR_DURATION_MS: u64 = 5000;

const MAX_QUERY_CHARS: usize = 256;
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    nucleo: Nucleo<Choice>,
    total_count: usize,
    selected_idx: usize,
    search_query: String,
    should_quit: bool,
    picked: Option<SessionEntry>,
    clipboard: Box<dyn ClipboardProvider>,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self::with_clipboard(choices, Box::new(LazySystemClipboard::default()))
    }

    pub fn with_clipboard(choices: Vec<Choice>, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let nucleo = Nucleo::new(Config::DEFAULT, std::sync::Arc::new(|| {}), None, 1);

        let total_count = choices.len();
        let injector = nucleo.injector();
        for choice in choices {
            let search_text = choice.search_text.clone();
            injector.push(choice, move |_choice, cols| {
                cols[0] = search_text.clone().into();
            });
        }

        Self {
            nucleo,
            total_count,
            selected_idx: 0,
            search_query: String::new(),
            should_quit: false,
            picked: None,
            clipboard,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    fn process_nucleo_updates(&mut self) {
        let status = self.nucleo.tick(10);
        if status.changed {
            self.needs_redraw = true;
        }
    }

    /// Run until the user picks a session (`Some`) or cancels (`None`)
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<Option<SessionEntry>> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.process_nucleo_updates();

            let matched_count = self.collect_matched_items().len();
            self.clamp_selection(matched_count);

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let matched_items = self.collect_matched_items();
                let state = RenderState {
                    search_query: &self.search_query,
                    total_count: self.total_count,
                    status_message: self.status_message.as_ref(),
                };
                terminal.draw(|f| render_ui(f, &matched_items, self.selected_idx, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, matched_count);
        }

        Ok(self.picked)
    }

    fn collect_matched_items(&self) -> Vec<&Choice> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| item.data).collect()
    }

    fn selected_choice(&self) -> Option<&Choice> {
        self.collect_matched_items().get(self.selected_idx).copied()
    }

    fn handle_action(&mut self, action: Action, total_items: usize) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.update_nucleo_pattern();
                }
            }
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-PAGE_SIZE, total_items),
            Action::PageDown => self.move_selection(PAGE_SIZE, total_items),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::Select => match self.selected_choice() {
                Some(choice) => {
                    self.picked = Some(choice.entry.clone());
                    self.should_quit = true;
                }
                None => {
                    self.set_status("✗ No session selected", MessageType::Error, STATUS_ERROR_DURATION_MS)
                }
            },
            Action::CopySessionId => self.copy_selected_id(),
            Action::None => {}
        }
    }

    fn copy_selected_id(&mut self) {
        let Some(session_id) = self.selected_choice().map(|c| c.entry.session_id.clone()) else {
            self.set_status("✗ No session to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_session_id(&session_id, self.clipboard.as_mut()) {
            Ok(()) => self.set_status(
                format!("✓ Copied {}", session_id),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn clamp_selection(&mut self, total: usize) {
        let max = total.saturating_sub(1);
        if self.selected_idx > max {
            self.selected_idx = max;
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.search_query.chars().count() < MAX_QUERY_CHARS {
            self.search_query.push(c);
            self.update_nucleo_pattern();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.update_nucleo_pattern();
        }
    }

    fn update_nucleo_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.search_query,
            nucleo::pattern::CaseMatching::Smart,
            nucleo::pattern::Normalization::Smart,
            false,
        );
        self.nucleo.tick(10);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }
}
