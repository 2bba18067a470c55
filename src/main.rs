use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wedding_invite_bot::bot::{self, BotRouter, TelegramTransport};
use wedding_invite_bot::config::Config;
use wedding_invite_bot::localization::Texts;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting wedding invitation bot");

    let config = Config::from_env()?;
    if config.admin_chat_id.is_none() {
        info!("ADMIN_CHAT_ID not set, RSVP notifications are disabled");
    }

    let texts = Texts::new()?;
    let bot = Bot::new(config.bot_token.clone());
    let router: Arc<BotRouter> = Arc::new(BotRouter::new(&config, texts, TelegramTransport::new(bot.clone())));

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
