//! Throwaway local web server for sharing one session
//!
//! The session is rendered and serialized once up front; handlers only hand
//! out the prepared bytes. The server listens on loopback only and stops on
//! Ctrl+C.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;

use crate::models::{Session, SharedSession};
use crate::render::render_session_html;

/// First port tried when none is requested
pub const DEFAULT_PORT: u16 = 3000;

/// How many ports after the starting one are tried before giving up
pub const PORT_ATTEMPTS: u16 = 100;

#[derive(Debug, Clone, Copy)]
pub struct ServeOptions {
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, open_browser: true }
    }
}

#[derive(Clone)]
struct ShareState {
    page: Arc<String>,
    session_json: Arc<String>,
}

/// Routes for one shared session
///
/// `/session.json` is the session without local paths; every other path
/// serves the rendered page.
pub fn router(session: &Session) -> Result<Router> {
    let session_json = serde_json::to_string(&SharedSession::from(session))
        .context("Failed to serialize session")?;
    let state = ShareState {
        page: Arc::new(render_session_html(session)),
        session_json: Arc::new(session_json),
    };

    Ok(Router::new()
        .route("/", get(page))
        .route("/session.json", get(session_json_handler))
        .fallback(page)
        .with_state(state))
}

async fn page(State(state): State<ShareState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

async fn session_json_handler(State(state): State<ShareState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], state.session_json.as_ref().clone())
}

/// Bind the first free loopback port in `start..=start + PORT_ATTEMPTS`
pub async fn bind_free_port(start: u16) -> Result<TcpListener> {
    let end = start.saturating_add(PORT_ATTEMPTS);
    for port in start..=end {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) => tracing::debug!(port, error = %e, "port unavailable"),
        }
    }
    bail!("No free port available between {} and {}", start, end)
}

/// Serve `session` until Ctrl+C
pub async fn serve(session: &Session, options: ServeOptions) -> Result<()> {
    let app = router(session)?;
    let listener = bind_free_port(options.port).await?;
    let addr = listener.local_addr().context("Failed to read listener address")?;
    let url = format!("http://{addr}");

    tracing::info!(%url, session_id = %session.entry.session_id, "share server listening");
    println!("Sharing session at {url}");
    println!("Press Ctrl+C to stop.");

    if options.open_browser
        && let Err(e) = open::that(&url)
    {
        tracing::warn!(error = %e, "could not open browser");
        eprintln!("Could not open a browser; visit {url} manually.");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Share server failed")?;

    tracing::info!("share server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
