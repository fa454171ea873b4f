// src/models/mod.rs

//! Domain models for the application.

mod config;
mod entry;
mod history;
mod secret;

// Re-export all public types
pub use config::{
    ApiConfig, CONFIG_FILE, Config, HISTORY_FILE, HistoryConfig, HistoryMode, HttpConfig,
    SECRET_FILE, SourceConfig,
};
pub use entry::Entry;
pub use history::History;
pub use secret::Secret;
