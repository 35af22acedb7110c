use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{ArgAction, Args, Parser, Subcommand};

use super::logging::init_logging;
use crate::indexer::{find_session, list_all_sessions, list_projects, list_sessions};
use crate::models::{ListSessionsOptions, ReadSessionOptions, SessionEntry};
use crate::reader::read_session;
use crate::server::{DEFAULT_PORT, ServeOptions, serve};
use crate::tui::pick_session;
use crate::utils::get_claude_dir;
use crate::utils::terminal::sanitize_line;
use crate::utils::text::{clean_prompt, truncate};

const TABLE_PROMPT_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "ccshare")]
#[command(version)]
#[command(about = "Browse Claude Code sessions and share them in the browser", long_about = None)]
pub struct Cli {
    /// Claude data directory [default: ~/.claude]
    #[arg(long, global = true, value_name = "PATH")]
    pub claude_dir: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a session and serve it on a local web page (default)
    Share(ShareArgs),
    /// List projects that have stored sessions
    Projects,
    /// List sessions, newest first
    Sessions(SessionsArgs),
    /// Print one session with its messages as JSON
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ShareArgs {
    /// Share this session instead of picking one
    pub session_id: Option<String>,

    /// First port to try; the next free one is used if taken
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Do not open a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Default for ShareArgs {
    fn default() -> Self {
        Self { session_id: None, port: DEFAULT_PORT, no_open: false }
    }
}

#[derive(Args)]
pub struct SessionsArgs {
    /// Project path, as printed by `ccshare projects` [default: all projects]
    pub project: Option<String>,

    /// Include sessions with no messages
    #[arg(long)]
    pub include_empty: bool,

    /// Include sidechain sessions
    #[arg(long)]
    pub sidechains: bool,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    pub session_id: String,

    /// Keep sidechain messages
    #[arg(long)]
    pub sidechain_messages: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let claude_dir = match cli.claude_dir {
        Some(dir) => dir,
        None => get_claude_dir()?,
    };
    tracing::debug!(claude_dir = %claude_dir.display(), "using claude directory");

    match cli.command.unwrap_or_else(|| Commands::Share(ShareArgs::default())) {
        Commands::Share(args) => share(&claude_dir, &args),
        Commands::Projects => {
            for project in list_projects(&claude_dir) {
                println!("{}", sanitize_line(&project));
            }
            Ok(())
        }
        Commands::Sessions(args) => show_sessions(&claude_dir, &args),
        Commands::Show(args) => show_session(&claude_dir, &args),
    }
}

fn share(claude_dir: &Path, args: &ShareArgs) -> Result<()> {
    let entry = match &args.session_id {
        Some(id) => lookup(claude_dir, id)?,
        None => {
            let entries = list_all_sessions(claude_dir, &ListSessionsOptions::default());
            if entries.is_empty() {
                bail!("No sessions found.");
            }
            let project_count =
                entries.iter().map(|e| e.project_path.as_str()).collect::<HashSet<_>>().len();
            eprintln!(
                "Found {} session(s) across {} project(s)",
                entries.len(),
                project_count
            );

            match pick_session(entries)? {
                Some(entry) => entry,
                None => return Ok(()),
            }
        }
    };

    println!("Selected session {}", entry.session_id);
    let session = read_session(&entry, &ReadSessionOptions::default());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(serve(&session, ServeOptions { port: args.port, open_browser: !args.no_open }))
}

fn lookup(claude_dir: &Path, session_id: &str) -> Result<SessionEntry> {
    find_session(claude_dir, session_id)
        .with_context(|| format!("Session not found: {}", session_id))
}

fn show_sessions(claude_dir: &Path, args: &SessionsArgs) -> Result<()> {
    let options =
        ListSessionsOptions { filter_empty: !args.include_empty, include_sidechains: args.sidechains };
    let entries = match &args.project {
        Some(project) => list_sessions(claude_dir, project, &options),
        None => list_all_sessions(claude_dir, &options),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries).context("Failed to serialize sessions")?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }
    for entry in &entries {
        println!("{}", format_session_row(entry));
    }
    Ok(())
}

/// `modified  count  id  [branch] prompt` on one line
fn format_session_row(entry: &SessionEntry) -> String {
    let modified = entry.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let branch = sanitize_line(&entry.git_branch);
    let branch = if branch.is_empty() { String::new() } else { format!("[{}] ", branch) };
    let prompt = truncate(&sanitize_line(&clean_prompt(&entry.first_prompt)), TABLE_PROMPT_CHARS);
    let session_id = sanitize_line(&entry.session_id);
    format!("{}  {:>4}  {}  {}{}", modified, entry.message_count, session_id, branch, prompt)
}

fn show_session(claude_dir: &Path, args: &ShowArgs) -> Result<()> {
    let entry = lookup(claude_dir, &args.session_id)?;
    let options = ReadSessionOptions { include_sidechain_messages: args.sidechain_messages };
    let session = read_session(&entry, &options);
    println!("{}", serde_json::to_string_pretty(&session).context("Failed to serialize session")?);
    Ok(())
}
