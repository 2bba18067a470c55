//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::dialogue::Event;

use super::BotRouter;

/// Commands the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Menu,
}

/// Parse `/start` or `/menu`, optionally addressed as `/start@bot_name`
pub fn parse_command(text: &str) -> Option<Command> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);

    match name {
        "start" => Some(Command::Start),
        "menu" => Some(Command::Menu),
        _ => None,
    }
}

pub async fn message_handler(msg: Message, router: Arc<BotRouter>) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let event = match parse_command(text) {
        Some(Command::Start) => Event::Entry { chat: msg.chat.id },
        Some(Command::Menu) => Event::MenuCommand { chat: msg.chat.id },
        None => {
            debug!(user_id = %msg.chat.id, message_length = text.len(), "Ignoring free text");
            return Ok(());
        }
    };

    router.handle(event).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), Some(Command::Start));
        assert_eq!(parse_command("/start@wedding_bot"), Some(Command::Start));
        assert_eq!(parse_command("  /menu please"), Some(Command::Menu));
        assert_eq!(parse_command("/help"), None);
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command(""), None);
    }
}
