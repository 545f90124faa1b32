pub mod client;
pub mod config;
pub mod conversation;
pub mod dispatcher;
pub mod events;
pub mod ui;

#[cfg(test)]
mod testing;

pub use client::{CompletionClient, CompletionError, GeminiClient};
pub use config::{Config, ConfigError};
pub use conversation::{Conversation, Role, Turn};
pub use dispatcher::Dispatcher;
pub use events::TurnEvent;
