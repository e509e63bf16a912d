//! Minimal framework config: token, optional API URL, log file path, retry
//! parameters. Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or
//! TELOXIDE_API_URL), LOG_FILE, RETRY_MAX_ATTEMPTS, RETRY_DELAY_SECS.

use std::env;
use std::time::Duration;

use anyhow::Result;
use hibot_core::RetryPolicy;

const DEFAULT_LOG_FILE: &str = "logs/hibot.log";

/// Minimal Telegram bot config (connectivity, logging, retry policy).
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub retry: RetryPolicy,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required; TELEGRAM_API_URL, LOG_FILE,
    /// RETRY_MAX_ATTEMPTS, RETRY_DELAY_SECS optional. Unparsable retry values
    /// are an error, not a silent default.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        Self::from_env_with_token(bot_token)
    }

    /// Loads from env, with the token overridden when `token` is given
    /// (CLI `--token` beats BOT_TOKEN).
    pub fn load(token: Option<String>) -> Result<Self> {
        match token {
            Some(token) => Self::from_env_with_token(token),
            None => Self::from_env(),
        }
    }

    fn from_env_with_token(bot_token: String) -> Result<Self> {
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let retry = load_retry_policy()?;
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            retry,
        })
    }

    /// Builds config with the given token; other fields default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Reads RETRY_MAX_ATTEMPTS / RETRY_DELAY_SECS; unset means the defaults the
/// retry policy ships with (3 attempts, 2s).
fn load_retry_policy() -> Result<RetryPolicy> {
    let defaults = RetryPolicy::default();

    let max_attempts = match env::var("RETRY_MAX_ATTEMPTS") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid RETRY_MAX_ATTEMPTS: {}", raw))?,
        Err(_) => defaults.max_attempts(),
    };

    let delay = match env::var("RETRY_DELAY_SECS") {
        Ok(raw) => Duration::from_secs(
            raw.parse::<u64>()
                .map_err(|_| anyhow::anyhow!("Invalid RETRY_DELAY_SECS: {}", raw))?,
        ),
        Err(_) => defaults.delay(),
    };

    Ok(RetryPolicy::new(max_attempts, delay))
}
