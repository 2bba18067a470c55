//! Dialogue router: turns inbound events into renders and side effects.
//!
//! Every outbound call returns a `Result` that is logged and dropped at the
//! call site, so a failed admin notification never keeps the guest from
//! seeing the acknowledgment or the menu.

use std::sync::Arc;

use teloxide::types::{ChatId, MessageId};
use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, Page};
use crate::config::Config;
use crate::dialogue::{ConversationSlot, Event, RsvpEvent, SenderProfile, SlotDialogue, SlotStorage};
use crate::localization::Texts;
use crate::transport::{MessageRef, Render, Transport};

use super::ui_builder::{create_main_menu_keyboard, create_rsvp_keyboard, Keyboard, ATTEND_NO, ATTEND_YES, MAIN_MENU};

/// What the router did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Ignored,
}

pub struct Router<T> {
    transport: T,
    texts: Texts,
    catalog: Catalog,
    rsvp_keyboard: Keyboard,
    menu_keyboard: Keyboard,
    admin_chat_id: Option<ChatId>,
    slots: Arc<SlotStorage>,
}

impl<T: Transport> Router<T> {
    pub fn new(config: &Config, texts: Texts, transport: T) -> Self {
        let catalog = Catalog::new(&texts, &config.guest_chat_url);
        let rsvp_keyboard = create_rsvp_keyboard(&texts);
        let menu_keyboard = create_main_menu_keyboard(&texts);

        Self {
            transport,
            texts,
            catalog,
            rsvp_keyboard,
            menu_keyboard,
            admin_chat_id: config.admin_chat_id,
            slots: SlotStorage::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn texts(&self) -> &Texts {
        &self.texts
    }

    /// Handle one event to completion
    pub async fn handle(&self, event: Event) -> Outcome {
        match event {
            Event::Entry { chat } => {
                self.greet(chat).await;
                Outcome::Rendered
            }
            Event::MenuCommand { chat } => {
                self.send_menu(chat).await;
                Outcome::Rendered
            }
            Event::Callback { data, sender, origin } => self.handle_callback(&data, &sender, origin).await,
        }
    }

    /// Message id of the last main menu rendered in `chat`
    pub async fn menu_message(&self, chat: ChatId) -> Option<MessageId> {
        match self.dialogue(chat).get().await {
            Ok(slot) => slot.and_then(|slot| slot.menu_message),
            Err(e) => {
                error!(chat_id = %chat, error = %e, "Failed to read conversation slot");
                None
            }
        }
    }

    async fn handle_callback(&self, data: &str, sender: &SenderProfile, origin: MessageRef) -> Outcome {
        debug!(user_id = %sender.id, callback = %data, "Routing callback");

        // RSVP ids are exact matches and win over navigation
        if data == ATTEND_YES || data == ATTEND_NO {
            self.record_rsvp(sender, origin, data == ATTEND_YES).await;
            return Outcome::Rendered;
        }

        if data == MAIN_MENU {
            self.return_to_menu(origin).await;
            return Outcome::Rendered;
        }

        match self.catalog.resolve(data) {
            Some(page) => {
                self.show_page(origin, page).await;
                Outcome::Rendered
            }
            None => {
                debug!(user_id = %sender.id, callback = %data, "Ignoring unknown callback");
                Outcome::Ignored
            }
        }
    }

    async fn greet(&self, chat: ChatId) {
        let render = Render::plain(self.texts.get("welcome")).with_keyboard(self.rsvp_keyboard.clone());
        match self.transport.send(chat, &render).await {
            Ok(_) => info!(chat_id = %chat, "Greeting sent"),
            Err(e) => error!(chat_id = %chat, error = %e, "Failed to send greeting"),
        }
    }

    async fn record_rsvp(&self, sender: &SenderProfile, origin: MessageRef, attending: bool) {
        info!(user_id = %sender.id, attending, "RSVP received");

        if let Err(e) = self.transport.strip_keyboard(origin).await {
            warn!(user_id = %sender.id, error = %e, "Failed to remove RSVP buttons");
        }

        self.notify_admin(&RsvpEvent { sender, attending }).await;

        let ack_key = if attending { "rsvp-yes-ack" } else { "rsvp-no-ack" };
        if let Err(e) = self.transport.send(origin.chat, &Render::plain(self.texts.get(ack_key))).await {
            error!(user_id = %sender.id, error = %e, "Failed to send RSVP acknowledgment");
        }

        // Declining guests get no menu
        if attending {
            self.send_menu(origin.chat).await;
        }
    }

    async fn notify_admin(&self, rsvp: &RsvpEvent<'_>) {
        let Some(admin) = self.admin_chat_id else {
            debug!(user_id = %rsvp.sender.id, "Admin chat not configured, skipping RSVP notification");
            return;
        };

        let text = rsvp.admin_notification(&self.texts);
        match self.transport.send_to_admin(admin, &text).await {
            Ok(()) => info!(user_id = %rsvp.sender.id, "Admin notified of RSVP"),
            Err(e) => error!(user_id = %rsvp.sender.id, error = %e, "Failed to notify admin of RSVP"),
        }
    }

    async fn show_page(&self, origin: MessageRef, page: &Page) {
        let render = Render::plain(page.body.clone())
            .with_keyboard(page.keyboard.clone())
            .with_parse_mode(page.parse_mode());

        if let Err(e) = self.transport.edit(origin, &render).await {
            error!(chat_id = %origin.chat, page = ?page.id, error = %e, "Failed to show page");
        }
    }

    async fn return_to_menu(&self, origin: MessageRef) {
        match self.transport.edit(origin, &self.menu_render()).await {
            Ok(()) => self.remember_menu(origin.chat, origin.id).await,
            Err(e) => error!(chat_id = %origin.chat, error = %e, "Failed to restore main menu"),
        }
    }

    async fn send_menu(&self, chat: ChatId) {
        match self.transport.send(chat, &self.menu_render()).await {
            Ok(message) => self.remember_menu(chat, message.id).await,
            Err(e) => error!(chat_id = %chat, error = %e, "Failed to send main menu"),
        }
    }

    fn menu_render(&self) -> Render {
        Render::plain(self.texts.get("menu-prompt")).with_keyboard(self.menu_keyboard.clone())
    }

    async fn remember_menu(&self, chat: ChatId, message: MessageId) {
        let slot = ConversationSlot {
            menu_message: Some(message),
        };
        if let Err(e) = self.dialogue(chat).update(slot).await {
            error!(chat_id = %chat, error = %e, "Failed to update conversation slot");
        }
    }

    fn dialogue(&self, chat: ChatId) -> SlotDialogue {
        SlotDialogue::new(Arc::clone(&self.slots), chat)
    }
}
