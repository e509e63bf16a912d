//! `/start` and `/help` command handlers. Each sends its reply through the
//! injected [`Bot`] and returns `Reply`; anything else falls through with
//! `Continue` so dispatch can try the next handler.

use std::sync::Arc;

use async_trait::async_trait;
use hibot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

/// Greeting sent for `/start`.
pub const START_TEXT: &str =
    "Привет! Я ваш телеграм бот. Используйте /help для получения списка команд.";

/// Command list sent for `/help`.
pub const HELP_TEXT: &str =
    "Доступные команды:\n/start - Начать работу с ботом\n/help - Получить справку";

/// True when the first token of `content` is `command`, allowing the
/// `/cmd@botname` form Telegram uses in group chats.
fn is_command(content: &str, command: &str) -> bool {
    let token = content.split_whitespace().next().unwrap_or("");
    match token.split_once('@') {
        Some((name, _)) => name == command,
        None => token == command,
    }
}

/// Replies to `/start` with the greeting.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_command(&message.content, "/start") {
            return Ok(HandlerResponse::Continue);
        }
        self.bot.reply_to(message, START_TEXT).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Sent start greeting"
        );
        Ok(HandlerResponse::Reply(START_TEXT.to_string()))
    }
}

/// Replies to `/help` with the command list.
pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_command(&message.content, "/help") {
            return Ok(HandlerResponse::Continue);
        }
        self.bot.reply_to(message, HELP_TEXT).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Sent help text"
        );
        Ok(HandlerResponse::Reply(HELP_TEXT.to_string()))
    }
}
