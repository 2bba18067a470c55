//! Conversation state and inbound events.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::{ChatId, MessageId};

use crate::localization::Texts;
use crate::transport::MessageRef;

/// Per-conversation bookkeeping
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSlot {
    /// The message currently showing the main menu
    pub menu_message: Option<MessageId>,
}

pub type SlotStorage = InMemStorage<ConversationSlot>;

/// Type alias for the per-chat slot dialogue
pub type SlotDialogue = Dialogue<ConversationSlot, SlotStorage>;

/// Profile fields of whoever pressed a button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderProfile {
    pub id: u64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl SenderProfile {
    pub fn new(id: u64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            username: None,
        }
    }

    /// First name, family name when known, then `(@handle)` when known
    pub fn display(&self) -> String {
        let mut display = self.first_name.clone();
        if let Some(last_name) = self.last_name.as_deref().filter(|s| !s.is_empty()) {
            display.push(' ');
            display.push_str(last_name);
        }
        if let Some(username) = self.username.as_deref().filter(|s| !s.is_empty()) {
            display.push_str(&format!(" (@{username})"));
        }
        display
    }
}

/// Something the transport delivered for the router to handle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `/start`
    Entry { chat: ChatId },
    /// `/menu`
    MenuCommand { chat: ChatId },
    /// Inline button press
    Callback {
        data: String,
        sender: SenderProfile,
        origin: MessageRef,
    },
}

impl Event {
    pub fn chat(&self) -> ChatId {
        match self {
            Event::Entry { chat } | Event::MenuCommand { chat } => *chat,
            Event::Callback { origin, .. } => origin.chat,
        }
    }
}

/// An RSVP answer, alive only long enough to notify the administrator
#[derive(Clone, Debug)]
pub struct RsvpEvent<'a> {
    pub sender: &'a SenderProfile,
    pub attending: bool,
}

impl RsvpEvent<'_> {
    pub fn admin_notification(&self, texts: &Texts) -> String {
        let key = if self.attending {
            "admin-rsvp-yes"
        } else {
            "admin-rsvp-no"
        };
        let guest = self.sender.display();
        let id = self.sender.id.to_string();
        texts.get_with_args(key, &[("guest", guest.as_str()), ("id", id.as_str())])
    }
}
