use reqwest::Url;
use teloxide::types::ParseMode;

use wedding_invite_bot::bot::ui_builder::{ButtonAction, MAIN_MENU};
use wedding_invite_bot::catalog::{Catalog, PageId};
use wedding_invite_bot::config::DEFAULT_GUEST_CHAT_URL;
use wedding_invite_bot::localization::Texts;

fn catalog() -> Catalog {
    let texts = Texts::new().unwrap();
    Catalog::new(&texts, &Url::parse(DEFAULT_GUEST_CHAT_URL).unwrap())
}

/// Every page has a body and exactly one way back to the menu
#[test]
fn test_every_page_has_body_and_single_back_action() {
    let catalog = catalog();

    for id in PageId::ALL {
        let page = catalog.resolve(id.callback_id()).expect("page should resolve");
        assert_eq!(page.id, id);
        assert!(!page.body.trim().is_empty());
        assert!(!page.body.contains("Missing translation"));
        assert_eq!(page.parse_mode(), ParseMode::Html);

        let back_actions = page
            .keyboard
            .buttons()
            .filter(|button| button.callback_data() == Some(MAIN_MENU))
            .count();
        assert_eq!(back_actions, 1, "{id:?} should have one back button");
    }
}

#[test]
fn test_only_guest_chat_links_out_and_link_precedes_back() {
    let catalog = catalog();

    for id in PageId::ALL {
        let page = catalog.page(id).unwrap();
        let buttons: Vec<_> = page.keyboard.buttons().collect();
        let url_positions: Vec<usize> = buttons
            .iter()
            .enumerate()
            .filter(|(_, button)| matches!(button.action, ButtonAction::Url(_)))
            .map(|(i, _)| i)
            .collect();

        if id == PageId::GuestChat {
            assert_eq!(url_positions, vec![0]);
            assert_eq!(buttons.last().unwrap().callback_data(), Some(MAIN_MENU));
        } else {
            assert!(url_positions.is_empty());
            assert_eq!(buttons.len(), 1);
        }
    }
}

#[test]
fn test_unknown_ids_do_not_resolve() {
    let catalog = catalog();

    for data in ["xyz", "", "main_menu", "attend_yes", "Location", "dress-code"] {
        assert!(catalog.resolve(data).is_none(), "{data} should not resolve");
    }
}

#[test]
fn test_page_content_mentions_event_details() {
    let catalog = catalog();

    assert!(catalog.resolve("location").unwrap().body.contains("Relax Resort"));
    assert!(catalog.resolve("timing").unwrap().body.contains("14:00"));
    assert!(catalog.resolve("transport").unwrap().body.contains("12:50"));
}
