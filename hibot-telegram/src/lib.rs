//! # hibot-telegram
//!
//! Telegram framework layer: adapters, [`hibot_core::Bot`] implementation, minimal config,
//! REPL runner. Handles only Telegram connectivity and handler dispatch; command logic
//! lives in hibot-handlers and the retry/notification policy in hibot-core.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{build_teloxide_bot, dispatch, run_repl};
