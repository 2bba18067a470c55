//! UI Builder module for creating keyboards

use reqwest::Url;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::catalog::PageId;
use crate::localization::Texts;

pub const ATTEND_YES: &str = "attend_yes";
pub const ATTEND_NO: &str = "attend_no";
pub const MAIN_MENU: &str = "main_menu";

/// What pressing a button does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Delivered back to the bot as callback data
    Callback(String),
    /// Opened by the client, never routed
    Url(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    pub fn url(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url),
        }
    }

    /// Callback data, if this button is routed back to the bot
    pub fn callback_data(&self) -> Option<&str> {
        match &self.action {
            ButtonAction::Callback(data) => Some(data),
            ButtonAction::Url(_) => None,
        }
    }
}

/// Inline keyboard as ordered rows of buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// All buttons in display order
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Callback data of every routed button in display order
    pub fn callback_ids(&self) -> Vec<&str> {
        self.buttons().filter_map(Button::callback_data).collect()
    }

    pub fn to_markup(&self) -> InlineKeyboardMarkup {
        let rows = self.rows.iter().map(|row| {
            row.iter()
                .map(|button| match &button.action {
                    ButtonAction::Callback(data) => {
                        InlineKeyboardButton::callback(button.label.clone(), data.clone())
                    }
                    ButtonAction::Url(url) => InlineKeyboardButton::url(button.label.clone(), url.clone()),
                })
                .collect::<Vec<_>>()
        });

        InlineKeyboardMarkup::new(rows)
    }
}

/// Two RSVP buttons, one per row, attached to the greeting
pub fn create_rsvp_keyboard(texts: &Texts) -> Keyboard {
    Keyboard::new(vec![
        vec![Button::callback(texts.get("button-attend-yes"), ATTEND_YES)],
        vec![Button::callback(texts.get("button-attend-no"), ATTEND_NO)],
    ])
}

/// The six content pages, two per row
pub fn create_main_menu_keyboard(texts: &Texts) -> Keyboard {
    let rows = PageId::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|page| Button::callback(texts.get(page.label_key()), page.callback_id()))
                .collect()
        })
        .collect();

    Keyboard::new(rows)
}

/// Single back-to-menu button
pub fn create_back_keyboard(texts: &Texts) -> Keyboard {
    Keyboard::new(vec![vec![back_button(texts)]])
}

/// External join link followed by the back button
pub fn create_guest_chat_keyboard(texts: &Texts, guest_chat_url: &Url) -> Keyboard {
    Keyboard::new(vec![
        vec![Button::url(texts.get("button-join-chat"), guest_chat_url.clone())],
        vec![back_button(texts)],
    ])
}

fn back_button(texts: &Texts) -> Button {
    Button::callback(texts.get("button-back"), MAIN_MENU)
}
