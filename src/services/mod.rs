//! Service layer for the application.
//!
//! This module contains the business logic for:
//! - Credential loading (`load_secret`)
//! - History persistence (`HistoryStore`)
//! - Source page scraping (`PageScraper`)
//! - Bookmark posting (`Publisher`, `Bookmarker`)

mod history;
mod page;
mod publisher;
mod secret;

pub use history::HistoryStore;
pub use page::{EntrySelectors, PageScraper, extract_entries};
pub use publisher::{BookmarkResponse, Bookmarker, InstapaperClient, PublishOutcome, Publisher};
pub use secret::load_secret;
