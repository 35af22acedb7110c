//! Copying session ids to the system clipboard
//!
//! The picker goes through [`ClipboardProvider`] so it can be exercised
//! without a display server.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Something that can receive copied text
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The real clipboard, via arboard
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Opens the system clipboard on first use and keeps it for later copies
///
/// On Linux the copied text only lives as long as the owning `Clipboard`,
/// so the handle is held for the whole picker session.
#[derive(Default)]
pub struct LazySystemClipboard {
    inner: Option<SystemClipboard>,
}

impl ClipboardProvider for LazySystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => SystemClipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text)
    }
}

/// Copy a session id, rejecting values that are not a single token
pub fn copy_session_id(session_id: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    if session_id.is_empty() {
        bail!("Session has no id to copy");
    }
    if session_id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        bail!("Session id contains whitespace or control characters");
    }

    provider.set_text(session_id)?;
    tracing::debug!(session_id, "copied session id to clipboard");
    Ok(())
}
