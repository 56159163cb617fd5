//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! hands any resulting actions to the action executor.

use tokio::sync::mpsc;

use crate::actions::{handle_action, ActionContext};
use crate::dispatch::MessageDispatcher;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<D>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    ctx: &ActionContext<D>,
) where
    D: MessageDispatcher + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), ctx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
