//! # hibot-core
//!
//! Core types and traits for the hibot Telegram bot: [`Bot`], [`Handler`], message and user types,
//! the retry wrapper ([`RetryPolicy`], [`RetryHandler`]), failure classification
//! ([`FailureCategory`], [`ErrorNotifier`]), and tracing initialization. Transport-agnostic;
//! used by hibot-handlers and hibot-telegram.

pub mod error;
pub mod failure;
pub mod logger;
pub mod retry;
pub mod types;

pub use error::{BotError, Result};
pub use failure::{classify, ErrorNotifier, FailureCategory, FailureReport, NETWORK_RETRY_TEXT};
pub use logger::init_tracing;
pub use retry::{run_with_retry, RetryHandler, RetryPolicy};
pub use types::{
    Bot, Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser,
    User,
};
