use wedding_invite_bot::catalog::PageId;
use wedding_invite_bot::localization::Texts;

const REQUIRED_KEYS: &[&str] = &[
    "welcome",
    "button-attend-yes",
    "button-attend-no",
    "rsvp-yes-ack",
    "rsvp-no-ack",
    "admin-rsvp-yes",
    "admin-rsvp-no",
    "menu-prompt",
    "button-back",
    "button-join-chat",
];

#[test]
fn test_all_user_facing_keys_exist() {
    let texts = Texts::new().unwrap();

    for key in REQUIRED_KEYS {
        assert!(texts.has(key), "missing key {key}");
    }
}

#[test]
fn test_page_bodies_keep_paragraph_breaks() {
    let texts = Texts::new().unwrap();
    let transport = texts.get("page-transport");

    assert!(transport.contains("\n\n"));
    assert!(!transport.starts_with('\n'));
    assert!(!transport.ends_with('\n'));
}

#[test]
fn test_menu_labels_are_distinct() {
    let texts = Texts::new().unwrap();
    let mut labels: Vec<String> = PageId::ALL
        .iter()
        .map(|id| texts.get(&format!("button-{}", id.callback_id().replace('_', "-"))))
        .collect();
    labels.sort();
    labels.dedup();

    assert_eq!(labels.len(), 6);
    assert!(labels.iter().all(|label| !label.starts_with("Missing translation")));
}

#[test]
fn test_admin_notification_arguments() {
    let texts = Texts::new().unwrap();
    let text = texts.get_with_args("admin-rsvp-yes", &[("guest", "Anna (@anna)"), ("id", "123456789")]);

    assert!(text.contains("Anna (@anna)"));
    assert!(text.contains("123456789"));
}
