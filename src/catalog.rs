//! # Content Catalog
//!
//! Immutable set of informational pages reachable from the main menu.
//! Bodies and keyboards are rendered once at construction; lookups are
//! pure.

use std::collections::HashMap;

use reqwest::Url;
use teloxide::types::ParseMode;

use crate::bot::ui_builder::{create_back_keyboard, create_guest_chat_keyboard, Keyboard};
use crate::localization::Texts;

/// Identifier of a content page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Location,
    Timing,
    Transport,
    DressCode,
    Gifts,
    GuestChat,
}

impl PageId {
    /// Menu order
    pub const ALL: [PageId; 6] = [
        PageId::Location,
        PageId::Timing,
        PageId::Transport,
        PageId::DressCode,
        PageId::Gifts,
        PageId::GuestChat,
    ];

    pub fn callback_id(self) -> &'static str {
        match self {
            PageId::Location => "location",
            PageId::Timing => "timing",
            PageId::Transport => "transport",
            PageId::DressCode => "dress_code",
            PageId::Gifts => "gifts",
            PageId::GuestChat => "guest_chat",
        }
    }

    /// Exact match on callback data
    pub fn from_callback(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.callback_id() == data)
    }

    pub(crate) fn body_key(self) -> &'static str {
        match self {
            PageId::Location => "page-location",
            PageId::Timing => "page-timing",
            PageId::Transport => "page-transport",
            PageId::DressCode => "page-dress-code",
            PageId::Gifts => "page-gifts",
            PageId::GuestChat => "page-guest-chat",
        }
    }

    pub(crate) fn label_key(self) -> &'static str {
        match self {
            PageId::Location => "button-location",
            PageId::Timing => "button-timing",
            PageId::Transport => "button-transport",
            PageId::DressCode => "button-dress-code",
            PageId::Gifts => "button-gifts",
            PageId::GuestChat => "button-guest-chat",
        }
    }
}

/// A static content page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub body: String,
    pub keyboard: Keyboard,
}

impl Page {
    /// Page bodies use HTML for bold text and links
    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::Html
    }
}

pub struct Catalog {
    pages: HashMap<PageId, Page>,
}

impl Catalog {
    pub fn new(texts: &Texts, guest_chat_url: &Url) -> Self {
        let pages = PageId::ALL
            .into_iter()
            .map(|id| {
                let keyboard = match id {
                    PageId::GuestChat => create_guest_chat_keyboard(texts, guest_chat_url),
                    _ => create_back_keyboard(texts),
                };
                let page = Page {
                    id,
                    body: texts.get(id.body_key()),
                    keyboard,
                };
                (id, page)
            })
            .collect();

        Self { pages }
    }

    /// Look up a page by callback data; `None` for anything unknown
    pub fn resolve(&self, data: &str) -> Option<&Page> {
        PageId::from_callback(data).and_then(|id| self.page(id))
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id).filter(|page| !page.body.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_ids_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_callback(page.callback_id()), Some(page));
        }
        assert_eq!(PageId::from_callback("xyz"), None);
        assert_eq!(PageId::from_callback("locat"), None);
        assert_eq!(PageId::from_callback("location "), None);
    }

    #[test]
    fn test_empty_body_resolves_to_nothing() {
        let texts = Texts::from_source("uk", "page-location = { \"\" }\nbutton-back = back\n").unwrap();
        let url = Url::parse("https://t.me/+example").unwrap();
        let catalog = Catalog::new(&texts, &url);
        assert!(catalog.resolve("location").is_none());
    }
}
