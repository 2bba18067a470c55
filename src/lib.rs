//! # Wedding Invitation Telegram Bot
//!
//! Greets guests, records their RSVP, notifies the hosts and serves a small
//! menu of static event pages. Also ships a link-to-QR-image utility.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod errors;
pub mod localization;
pub mod qr;
pub mod test_utils;
pub mod transport;
