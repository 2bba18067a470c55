//! # Configuration Module
//!
//! Process configuration read once from the environment at startup and
//! handed to the router and the transport adapter by reference.

use reqwest::Url;
use teloxide::types::ChatId;

use crate::errors::ConfigError;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const LEGACY_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const ADMIN_CHAT_ID_VAR: &str = "ADMIN_CHAT_ID";
pub const GUEST_CHAT_URL_VAR: &str = "GUEST_CHAT_URL";
pub const DEFAULT_GUEST_CHAT_URL: &str = "https://t.me/+HAdohx3VjvRmZjQy";

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram Bot API token
    pub bot_token: String,
    /// Where RSVP notifications go; `None` disables them
    pub admin_chat_id: Option<ChatId>,
    /// Invite link behind the guest chat page's join button
    pub guest_chat_url: Url,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token = non_blank(BOT_TOKEN_VAR)
            .or_else(|| non_blank(LEGACY_BOT_TOKEN_VAR))
            .ok_or(ConfigError::MissingToken)?;

        let admin_chat_id = match non_blank(ADMIN_CHAT_ID_VAR) {
            Some(raw) => Some(ChatId(
                raw.parse::<i64>()
                    .map_err(|_| ConfigError::InvalidAdminChatId(raw.clone()))?,
            )),
            None => None,
        };

        let raw_url = non_blank(GUEST_CHAT_URL_VAR).unwrap_or_else(|| DEFAULT_GUEST_CHAT_URL.to_string());
        let guest_chat_url =
            Url::parse(&raw_url).map_err(|_| ConfigError::InvalidGuestChatUrl(raw_url.clone()))?;

        Ok(Self {
            bot_token,
            admin_chat_id,
            guest_chat_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[(ADMIN_CHAT_ID_VAR, "1")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingToken);

        let result = Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "   ")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingToken);
    }

    #[test]
    fn test_legacy_token_variable_is_accepted() {
        let config = Config::from_lookup(lookup_from(&[(LEGACY_BOT_TOKEN_VAR, "123:abc")])).unwrap();
        assert_eq!(config.bot_token, "123:abc");
    }

    #[test]
    fn test_admin_chat_is_optional() {
        let config = Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "t")])).unwrap();
        assert!(config.admin_chat_id.is_none());
        assert_eq!(config.guest_chat_url.as_str(), DEFAULT_GUEST_CHAT_URL);

        let config = Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "t"), (ADMIN_CHAT_ID_VAR, "")])).unwrap();
        assert!(config.admin_chat_id.is_none());

        let config =
            Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "t"), (ADMIN_CHAT_ID_VAR, "-1001234")])).unwrap();
        assert_eq!(config.admin_chat_id, Some(ChatId(-1001234)));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let result = Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "t"), (ADMIN_CHAT_ID_VAR, "admin")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidAdminChatId("admin".to_string())
        );

        let result = Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "t"), (GUEST_CHAT_URL_VAR, "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidGuestChatUrl(_))));
    }
}
