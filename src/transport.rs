//! # Transport Boundary
//!
//! Outbound side of the messaging platform as seen by the router. The
//! Telegram implementation lives in `bot::telegram`.

use async_trait::async_trait;
use teloxide::types::{ChatId, MessageId, ParseMode};

use crate::bot::ui_builder::Keyboard;
use crate::errors::DeliveryError;

/// A message already delivered to a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat: ChatId,
    pub id: MessageId,
}

/// Render instruction: text plus the keyboard to attach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    pub parse_mode: Option<ParseMode>,
}

impl Render {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            parse_mode: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a new message and return where it landed
    async fn send(&self, chat: ChatId, render: &Render) -> Result<MessageRef, DeliveryError>;

    /// Replace a message's text and keyboard in place
    async fn edit(&self, message: MessageRef, render: &Render) -> Result<(), DeliveryError>;

    /// Remove the inline keyboard; succeeds on an already-stripped message
    async fn strip_keyboard(&self, message: MessageRef) -> Result<(), DeliveryError>;

    /// One-way plain text message to the administrator
    async fn send_to_admin(&self, admin: ChatId, text: &str) -> Result<(), DeliveryError>;
}
