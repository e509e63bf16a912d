//! # hibot-handlers
//!
//! Handler implementations for the bot's two commands: [`StartHandler`] and [`HelpHandler`].

mod commands;

pub use commands::{HelpHandler, StartHandler, HELP_TEXT, START_TEXT};
