//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::{load_preferences, save_preferences};
use crate::dispatch::MessageDispatcher;
use crate::links::open_target;
use crate::message::Message;
use crate::UpdateAction;
use folio_core::prelude::*;

/// Everything background actions need besides the message channel
pub struct ActionContext<D> {
    /// Delivers contact form messages
    pub dispatcher: Arc<D>,
    /// Where `preferences.toml` lives
    pub config_dir: PathBuf,
    /// Custom opener command; empty means the platform default
    pub opener: String,
    /// Started by the first theme change
    theme_writer: OnceLock<ThemeWriter>,
}

impl<D> ActionContext<D> {
    pub fn new(dispatcher: D, config_dir: PathBuf, opener: String) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config_dir,
            opener,
            theme_writer: OnceLock::new(),
        }
    }

    /// Wait until the most recent theme change is on disk
    pub async fn finish(self) {
        let Some(ThemeWriter { latest, task }) = self.theme_writer.into_inner() else {
            return;
        };
        drop(latest);
        if let Err(e) = task.await {
            error!("Theme writer task failed: {}", e);
        }
    }
}

/// Single background task that owns `preferences.toml` writes.
///
/// Only the newest requested value is kept, and writes never overlap, so the
/// file settles on whatever the last toggle asked for.
struct ThemeWriter {
    latest: watch::Sender<Option<bool>>,
    task: JoinHandle<()>,
}

impl ThemeWriter {
    fn spawn(config_dir: PathBuf, msg_tx: mpsc::Sender<Message>) -> Self {
        let (latest, mut requested) = watch::channel(None);

        let task = tokio::spawn(async move {
            while requested.changed().await.is_ok() {
                let value = *requested.borrow_and_update();
                let Some(dark) = value else {
                    continue;
                };

                let dir = config_dir.clone();
                let saved = tokio::task::spawn_blocking(move || persist_theme(&dir, dark))
                    .await
                    .unwrap_or_else(|e| Err(Error::config(format!("Theme save aborted: {}", e))));

                match saved {
                    Ok(()) => debug!("Theme preference saved (dark = {})", dark),
                    Err(e) => {
                        report(
                            &msg_tx,
                            Message::ThemeSaveFailed {
                                error: e.to_string(),
                            },
                        )
                        .await
                    }
                }
            }
            trace!("Theme writer stopped");
        });

        Self { latest, task }
    }

    fn request(&self, dark: bool) {
        self.latest.send_replace(Some(dark));
    }
}

/// Hand a background result to the main loop
async fn report(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if let Err(e) = msg_tx.send(message).await {
        debug!("Dropped background result: {}", Error::channel_send(e.to_string()));
    }
}

/// Execute an action on a background task
pub fn handle_action<D>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, ctx: &ActionContext<D>)
where
    D: MessageDispatcher + Sync + 'static,
{
    match action {
        UpdateAction::DispatchContact { message } => {
            let dispatcher = Arc::clone(&ctx.dispatcher);
            tokio::spawn(async move {
                let reply = match dispatcher.dispatch(&message).await {
                    Ok(()) => Message::ContactSent,
                    Err(e) => {
                        error!("Contact dispatch failed: {}", e);
                        Message::ContactSendFailed {
                            error: e.to_string(),
                        }
                    }
                };
                report(&msg_tx, reply).await;
            });
        }

        UpdateAction::PersistTheme { dark } => {
            ctx.theme_writer
                .get_or_init(|| ThemeWriter::spawn(ctx.config_dir.clone(), msg_tx))
                .request(dark);
        }

        UpdateAction::OpenExternal { target } => {
            let opener = ctx.opener.clone();
            // Launching the opener blocks on process spawn and file checks
            tokio::task::spawn_blocking(move || {
                if let Err(e) = open_target(&target, &opener) {
                    error!("Failed to open {}: {}", target, e);
                    let failed = Message::LinkOpenFailed {
                        target: target.to_string(),
                        error: e.to_string(),
                    };
                    if let Err(e) = msg_tx.blocking_send(failed) {
                        debug!("Dropped background result: {}", Error::channel_send(e.to_string()));
                    }
                }
            });
        }
    }
}

/// Store the theme flag in `preferences.toml`, keeping any other keys
pub fn persist_theme(config_dir: &Path, dark: bool) -> Result<()> {
    let mut prefs = load_preferences(config_dir);
    prefs.dark_mode = Some(dark);
    save_preferences(config_dir, &prefs)
        .with_context(|| format!("Failed to save theme preference in {:?}", config_dir))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::contact::ContactMessage;
    use crate::dispatch::testing::ScriptedDispatcher;
    use crate::links::LinkTarget;
    use tempfile::tempdir;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    async fn recv(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[test]
    fn test_persist_theme_matches_each_toggle() {
        let dir = tempdir().unwrap();
        let mut dark = false;
        for _ in 0..3 {
            dark = !dark;
            persist_theme(dir.path(), dark).unwrap();
            assert_eq!(load_preferences(dir.path()).dark_mode, Some(dark));
        }
    }

    #[tokio::test]
    async fn test_dispatch_success_reports_sent() {
        let (tx, mut rx) = mpsc::channel(4);
        let dir = tempdir().unwrap();
        let ctx = ActionContext::new(
            ScriptedDispatcher::succeeding(),
            dir.path().to_path_buf(),
            String::new(),
        );

        handle_action(
            UpdateAction::DispatchContact { message: message() },
            tx,
            &ctx,
        );

        assert_eq!(recv(&mut rx).await, Message::ContactSent);
        assert_eq!(ctx.dispatcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_failure_reports_failed() {
        let (tx, mut rx) = mpsc::channel(4);
        let dir = tempdir().unwrap();
        let ctx = ActionContext::new(
            ScriptedDispatcher::failing(),
            dir.path().to_path_buf(),
            String::new(),
        );

        handle_action(
            UpdateAction::DispatchContact { message: message() },
            tx,
            &ctx,
        );

        assert!(matches!(
            recv(&mut rx).await,
            Message::ContactSendFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_persist_theme_failure_reports_error() {
        let (tx, mut rx) = mpsc::channel(4);
        let dir = tempdir().unwrap();
        let not_a_dir = dir.path().join("file");
        std::fs::write(&not_a_dir, "").unwrap();

        let ctx = ActionContext::new(
            ScriptedDispatcher::succeeding(),
            not_a_dir.join("folio"),
            String::new(),
        );
        handle_action(UpdateAction::PersistTheme { dark: true }, tx, &ctx);

        assert!(matches!(
            recv(&mut rx).await,
            Message::ThemeSaveFailed { .. }
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_rapid_toggles_persist_last_value() {
        for round in 0..20 {
            let (tx, mut rx) = mpsc::channel(64);
            let dir = tempdir().unwrap();
            let ctx = ActionContext::new(
                ScriptedDispatcher::succeeding(),
                dir.path().to_path_buf(),
                String::new(),
            );

            let mut dark = round % 2 == 0;
            for _ in 0..21 {
                dark = !dark;
                handle_action(UpdateAction::PersistTheme { dark }, tx.clone(), &ctx);
            }
            ctx.finish().await;

            assert_eq!(load_preferences(dir.path()).dark_mode, Some(dark));
            assert!(rx.try_recv().is_err(), "unexpected save failure");
        }
    }

    #[tokio::test]
    async fn test_finish_without_theme_changes_returns() {
        let dir = tempdir().unwrap();
        let ctx = ActionContext::new(
            ScriptedDispatcher::succeeding(),
            dir.path().to_path_buf(),
            String::new(),
        );
        ctx.finish().await;
        assert_eq!(load_preferences(dir.path()).dark_mode, None);
    }

    #[tokio::test]
    async fn test_open_missing_file_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let dir = tempdir().unwrap();
        let ctx = ActionContext::new(
            ScriptedDispatcher::succeeding(),
            dir.path().to_path_buf(),
            String::new(),
        );
        let target = LinkTarget::File(dir.path().join("resume.pdf"));

        handle_action(UpdateAction::OpenExternal { target }, tx, &ctx);

        match recv(&mut rx).await {
            Message::LinkOpenFailed { target, .. } => assert!(target.ends_with("resume.pdf")),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
