//! # Error Types Module
//!
//! Error types shared by the bot, its configuration loader and the
//! link-to-image utility.

use thiserror::Error;

/// Failure to deliver something through the messaging transport.
///
/// The router never propagates these: each outbound call site logs the
/// error and carries on with the rest of the response sequence.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The Telegram Bot API rejected the request or could not be reached
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
    /// A transport refused the call for a reason of its own
    #[error("Delivery rejected: {0}")]
    Rejected(String),
}

/// Startup configuration errors. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOT_TOKEN must be set")]
    MissingToken,
    #[error("ADMIN_CHAT_ID is not a valid chat id: {0}")]
    InvalidAdminChatId(String),
    #[error("GUEST_CHAT_URL is not a valid URL: {0}")]
    InvalidGuestChatUrl(String),
}

/// Errors produced while turning a link into a QR image
#[derive(Error, Debug)]
pub enum QrError {
    #[error("Encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Image save error: {0}")]
    Save(#[from] image::ImageError),
}
