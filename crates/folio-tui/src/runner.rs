//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: resolve configuration and theme, build state, own the terminal
//! - `run_loop`: drain background messages, draw, poll terminal events

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use folio_app::actions::{persist_theme, ActionContext};
use folio_app::config::{load_preferences, load_settings};
use folio_app::process::process_message;
use folio_app::signals;
use folio_app::theme::{resolve_initial_theme, terminal_prefers_dark, ThemeSource};
use folio_app::{AppState, EmailJsDispatcher, Message, MessageDispatcher};
use folio_core::prelude::*;

use super::{event, render, terminal};

/// Startup options from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Holds `config.toml` and `preferences.toml`
    pub config_dir: PathBuf,
    /// `--dark` / `--light`
    pub forced_dark: Option<bool>,
}

/// Run the portfolio until the user quits or a termination signal arrives
pub async fn run(options: RunOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let settings = load_settings(&options.config_dir);
    let prefs = load_preferences(&options.config_dir);

    let (theme, source) =
        resolve_initial_theme(options.forced_dark, &prefs, terminal_prefers_dark);
    info!("Starting with {} theme ({:?})", theme.label(), source);
    if source == ThemeSource::Forced {
        if let Err(e) = persist_theme(&options.config_dir, theme.dark) {
            warn!("Failed to persist forced theme: {}", e);
        }
    }

    let catalog = Arc::new(Catalog::builtin().context("Failed to load built-in content")?);
    let dispatcher = EmailJsDispatcher::new(settings.contact.clone())
        .context("Failed to set up the contact dispatcher")?;
    let ctx = ActionContext::new(
        dispatcher,
        options.config_dir.clone(),
        settings.site.opener.clone(),
    );

    let mut state = AppState::new(catalog, settings, options.config_dir, theme);

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &ctx);
    ratatui::restore();

    signal_task.abort();
    ctx.finish().await;
    info!("Folio exiting");
    result
}

/// Main event loop
fn run_loop<D>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    ctx: &ActionContext<D>,
) -> Result<()>
where
    D: MessageDispatcher + Sync + 'static,
{
    while !state.should_quit() {
        // Results of background tasks, in arrival order
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, ctx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, ctx);
        }
    }

    Ok(())
}
