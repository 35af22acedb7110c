use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
///
/// `$HOME` wins when set so tests and wrappers can redirect the whole tree;
/// otherwise the platform home directory is used.
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir().context("Could not determine home directory")?,
    };
    Ok(home.join(".claude"))
}
