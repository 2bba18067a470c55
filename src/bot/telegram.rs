//! Telegram implementation of the transport boundary

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::{ApiError, RequestError};

use crate::errors::DeliveryError;
use crate::transport::{MessageRef, Render, Transport};

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Telegram refuses edits that change nothing; for us that is success
fn ignore_not_modified<T>(result: Result<T, RequestError>) -> Result<(), DeliveryError> {
    match result {
        Ok(_) => Ok(()),
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send(&self, chat: ChatId, render: &Render) -> Result<MessageRef, DeliveryError> {
        let mut request = self.bot.send_message(chat, render.text.clone());
        if let Some(keyboard) = &render.keyboard {
            request = request.reply_markup(keyboard.to_markup());
        }
        if let Some(parse_mode) = render.parse_mode {
            request = request.parse_mode(parse_mode);
        }

        let message = request.await?;
        Ok(MessageRef {
            chat: message.chat.id,
            id: message.id,
        })
    }

    async fn edit(&self, message: MessageRef, render: &Render) -> Result<(), DeliveryError> {
        let mut request = self
            .bot
            .edit_message_text(message.chat, message.id, render.text.clone());
        if let Some(keyboard) = &render.keyboard {
            request = request.reply_markup(keyboard.to_markup());
        }
        if let Some(parse_mode) = render.parse_mode {
            request = request.parse_mode(parse_mode);
        }

        ignore_not_modified(request.await)
    }

    async fn strip_keyboard(&self, message: MessageRef) -> Result<(), DeliveryError> {
        ignore_not_modified(self.bot.edit_message_reply_markup(message.chat, message.id).await)
    }

    async fn send_to_admin(&self, admin: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(admin, text.to_string()).await?;
        Ok(())
    }
}
