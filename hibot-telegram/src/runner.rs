//! REPL runner: converts teloxide messages to core messages, dispatches them
//! to the registered handlers, and routes uncaught handler failures to the
//! error notifier.

use std::sync::Arc;

use anyhow::Result;
use hibot_core::{
    ErrorNotifier, FailureReport, Handler, HandlerResponse, Message as CoreMessage, ToCoreMessage,
};
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Builds the teloxide Bot from a token and optional custom API URL. An
/// unparsable URL falls back to the default API endpoint.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Runs the handlers in order until one returns `Stop` or `Reply`. An `Err`
/// from a handler (already past its retry budget when wrapped) ends dispatch
/// and is reported to the notifier exactly once.
#[instrument(skip(handlers, notifier, message))]
pub async fn dispatch(
    handlers: &[Arc<dyn Handler>],
    notifier: &ErrorNotifier,
    message: &CoreMessage,
) {
    for handler in handlers {
        let handler_name = std::any::type_name_of_val(handler.as_ref());
        match handler.handle(message).await {
            Ok(HandlerResponse::Continue) => continue,
            Ok(HandlerResponse::Stop) => {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "Handler stopped dispatch"
                );
                break;
            }
            Ok(HandlerResponse::Reply(text)) => {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    reply_len = text.len(),
                    "Handler replied"
                );
                break;
            }
            Err(e) => {
                notifier
                    .notify(FailureReport {
                        error: &e,
                        message,
                    })
                    .await;
                break;
            }
        }
    }
}

/// Starts the polling REPL with the given teloxide Bot, handlers, and
/// notifier. Each text update is converted to a core [`Message`] and
/// dispatched in a spawned task, so a slow (or retrying) handler in one chat
/// never blocks updates from another.
#[instrument(skip(bot, handlers, notifier))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handlers: Vec<Arc<dyn Handler>>,
    notifier: Arc<ErrorNotifier>,
) -> Result<()> {
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let handlers = handlers.clone();
            let notifier = notifier.clone();

            async move {
                if msg.text().is_none() {
                    warn!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                    return Ok(());
                }

                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %core_msg.content,
                    "Received message"
                );

                // Run dispatch in a spawned task so the REPL returns immediately.
                tokio::spawn(async move {
                    dispatch(&handlers, &notifier, &core_msg).await;
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
