// Interactive session picker
mod app;
mod choices;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub use choices::{Choice, build_choices, common_path_prefix};

use crate::models::SessionEntry;
use terminal::TerminalManager;

/// Let the user pick one of `entries`; `None` when they cancel
///
/// Entries are shown in the order given.
pub fn pick_session(entries: Vec<SessionEntry>) -> Result<Option<SessionEntry>> {
    let app = App::new(build_choices(entries));

    let mut manager = TerminalManager::new()?;
    let picked = app.run(manager.terminal_mut());
    drop(manager);

    picked
}
