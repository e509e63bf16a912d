//! hibot binary: loads config, initializes logging, wraps the /start and /help
//! handlers in the retry policy, and runs the Telegram REPL.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hibot_core::{init_tracing, ErrorNotifier, Handler, RetryHandler};
use hibot_handlers::{HelpHandler, StartHandler};
use hibot_telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter, TelegramConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "hibot")]
#[command(about = "Telegram greeter bot with retrying handlers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = TelegramConfig::load(token)?;
            run_bot(config).await
        }
    }
}

/// Entry sequence: logging first, then assembly, then the REPL.
async fn run_bot(config: TelegramConfig) -> Result<()> {
    if let Some(parent) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory for {}", config.log_file))?;
    }
    init_tracing(&config.log_file)?;

    let bot = build_teloxide_bot(&config.bot_token, config.telegram_api_url.as_deref());
    let adapter: Arc<dyn hibot_core::Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    // Each command handler gets its own retry wrapper over the shared policy.
    let handlers: Vec<Arc<dyn Handler>> = vec![
        Arc::new(RetryHandler::new(
            Arc::new(StartHandler::new(adapter.clone())),
            config.retry.clone(),
        )),
        Arc::new(RetryHandler::new(
            Arc::new(HelpHandler::new(adapter.clone())),
            config.retry.clone(),
        )),
    ];
    let notifier = Arc::new(ErrorNotifier::new(adapter));

    info!(
        log_file = %config.log_file,
        max_attempts = config.retry.max_attempts(),
        delay_secs = config.retry.delay().as_secs(),
        "Bot started"
    );

    run_repl(bot, handlers, notifier).await
}
