//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: turns `/start` and `/menu` into router events
//! - `callback_handler`: turns inline button presses into router events
//! - `router`: the dialogue state machine
//! - `telegram`: Bot API implementation of the transport boundary
//! - `ui_builder`: keyboards and their Telegram markup

pub mod callback_handler;
pub mod message_handler;
pub mod router;
pub mod telegram;
pub mod ui_builder;

pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
pub use router::{Outcome, Router};
pub use telegram::TelegramTransport;

/// Router wired to the real Bot API
pub type BotRouter = Router<TelegramTransport>;
