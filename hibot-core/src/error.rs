use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Connectivity failure (timeout, connection reset, DNS, garbled response).
    /// Produced by the transport adapter; the only category surfaced to users.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
