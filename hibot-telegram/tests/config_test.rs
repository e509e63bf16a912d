//! Integration tests for [`hibot_telegram::TelegramConfig`]. Env-mutating, so
//! every test is serialized.

use std::time::Duration;

use hibot_telegram::TelegramConfig;
use serial_test::serial;

fn clear_env() {
    for key in [
        "BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "RETRY_MAX_ATTEMPTS",
        "RETRY_DELAY_SECS",
    ] {
        std::env::remove_var(key);
    }
}

/// **Test: from_env fails without BOT_TOKEN.**
#[test]
#[serial]
fn test_from_env_requires_token() {
    clear_env();
    assert!(TelegramConfig::from_env().is_err());
}

/// **Test: from_env picks up token, API URL, log file, and retry overrides.**
#[test]
#[serial]
fn test_from_env_reads_all_settings() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "token123");
    std::env::set_var("TELEGRAM_API_URL", "https://tg.example.com");
    std::env::set_var("LOG_FILE", "logs/custom.log");
    std::env::set_var("RETRY_MAX_ATTEMPTS", "5");
    std::env::set_var("RETRY_DELAY_SECS", "1");

    let config = TelegramConfig::from_env().unwrap();
    assert_eq!(config.bot_token, "token123");
    assert_eq!(
        config.telegram_api_url.as_deref(),
        Some("https://tg.example.com")
    );
    assert_eq!(config.log_file, "logs/custom.log");
    assert_eq!(config.retry.max_attempts(), 5);
    assert_eq!(config.retry.delay(), Duration::from_secs(1));

    clear_env();
}

/// **Test: unset retry vars fall back to the policy defaults (3 attempts, 2s).**
#[test]
#[serial]
fn test_retry_defaults_when_unset() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "token123");

    let config = TelegramConfig::from_env().unwrap();
    assert_eq!(config.retry.max_attempts(), 3);
    assert_eq!(config.retry.delay(), Duration::from_secs(2));

    clear_env();
}

/// **Test: an unparsable retry setting is rejected, not silently defaulted.**
#[test]
#[serial]
fn test_invalid_retry_setting_is_rejected() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "token123");
    std::env::set_var("RETRY_MAX_ATTEMPTS", "many");

    assert!(TelegramConfig::from_env().is_err());

    clear_env();
}

/// **Test: load(Some(token)) overrides BOT_TOKEN but keeps the other env settings.**
#[test]
#[serial]
fn test_load_with_cli_token_override() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "env_token");
    std::env::set_var("RETRY_MAX_ATTEMPTS", "4");

    let config = TelegramConfig::load(Some("cli_token".to_string())).unwrap();
    assert_eq!(config.bot_token, "cli_token");
    assert_eq!(config.retry.max_attempts(), 4);

    clear_env();
}

/// **Test: load(Some(token)) works with no BOT_TOKEN in the environment.**
#[test]
#[serial]
fn test_load_with_cli_token_and_no_env_token() {
    clear_env();

    let config = TelegramConfig::load(Some("cli_token".to_string())).unwrap();
    assert_eq!(config.bot_token, "cli_token");

    clear_env();
}
