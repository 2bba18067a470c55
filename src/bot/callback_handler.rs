//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::User;
use tracing::{debug, warn};

use crate::dialogue::{Event, SenderProfile};
use crate::transport::MessageRef;

use super::router::Outcome;
use super::BotRouter;

/// Profile fields Telegram supplied for the presser
pub fn sender_profile(user: &User) -> SenderProfile {
    SenderProfile {
        id: user.id.0,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
    }
}

/// Handle callback queries from inline keyboards
pub async fn callback_handler(bot: Bot, q: CallbackQuery, router: Arc<BotRouter>) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    // Answer the callback query to remove the loading state
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
    }

    let (Some(data), Some(msg)) = (q.data.clone(), q.message.as_ref()) else {
        debug!(user_id = %q.from.id, "Callback query without data or message, ignoring");
        return Ok(());
    };

    let event = Event::Callback {
        data,
        sender: sender_profile(&q.from),
        origin: MessageRef {
            chat: msg.chat().id,
            id: msg.id(),
        },
    };

    if router.handle(event).await == Outcome::Ignored {
        debug!(user_id = %q.from.id, "Callback ignored");
    }

    Ok(())
}
