//! Wraps teloxide::Bot and implements [`hibot_core::Bot`]. Production code sends
//! messages via Telegram; tests substitute another Bot impl.
//!
//! This is the only place that looks at teloxide's error hierarchy: transport
//! failures become [`BotError::Network`], everything else [`BotError::Bot`], so
//! the failure classifier never depends on teloxide types.

use async_trait::async_trait;
use hibot_core::{Bot as CoreBot, BotError, Chat, Message, Result};
use teloxide::prelude::*;
use teloxide::RequestError;

/// Thin wrapper around teloxide::Bot that implements hibot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Sorts teloxide request errors into the core taxonomy. Network, IO, and
/// garbled-response errors are connectivity problems; API-level errors
/// (bad request, blocked bot, throttling) are not.
fn map_request_error(e: RequestError) -> BotError {
    match e {
        RequestError::Network(_) | RequestError::Io(_) | RequestError::InvalidJson { .. } => {
            BotError::Network(e.to_string())
        }
        _ => BotError::Bot(e.to_string()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
