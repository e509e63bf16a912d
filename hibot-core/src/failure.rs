//! Failure classification and user notification: the terminal sink for
//! handler errors that survived all retries.

use std::sync::Arc;

use tracing::error;

use crate::error::BotError;
use crate::types::{Bot, Message};

/// Fixed user-facing text sent when an exhausted failure is classified as a
/// network problem.
pub const NETWORK_RETRY_TEXT: &str =
    "Произошла сетевая ошибка. Пожалуйста, попробуйте позже.";

/// Closed failure taxonomy as seen by the notifier. Produced by [`classify`];
/// nothing downstream of the transport adapter inspects transport error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Connectivity problem (timeout, connection reset, DNS failure).
    Network,
    /// Anything else; logged but not surfaced to the user.
    Other,
}

/// Sorts a core error into its [`FailureCategory`].
pub fn classify(error: &BotError) -> FailureCategory {
    match error {
        BotError::Network(_) => FailureCategory::Network,
        _ => FailureCategory::Other,
    }
}

/// An exhausted failure plus the message that triggered it. Created at failure
/// time and consumed synchronously by [`ErrorNotifier::notify`].
pub struct FailureReport<'a> {
    pub error: &'a BotError,
    pub message: &'a Message,
}

/// Terminal sink for uncaught handler failures: logs every report once at
/// error severity and sends the fixed retry-later text for network failures.
/// Performs no retries of its own.
pub struct ErrorNotifier {
    bot: Arc<dyn Bot>,
}

impl ErrorNotifier {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Handles one report. Non-network failures produce no user message; a
    /// failed notification send is logged and dropped.
    pub async fn notify(&self, report: FailureReport<'_>) {
        error!(
            user_id = report.message.user.id,
            chat_id = report.message.chat.id,
            error = %report.error,
            "Handler failed"
        );

        if classify(report.error) == FailureCategory::Network {
            if let Err(e) = self.bot.reply_to(report.message, NETWORK_RETRY_TEXT).await {
                error!(
                    chat_id = report.message.chat.id,
                    error = %e,
                    "Failed to send network-error notice"
                );
            }
        }
    }
}
