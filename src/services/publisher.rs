// src/services/publisher.rs

//! Bookmark publishing.
//!
//! Entries are posted one at a time, in the order they were scraped. Each post
//! is awaited to completion, body included, before the next one starts.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Entry, History, HistoryMode, Secret};

/// What the bookmarking endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkResponse {
    pub status: u16,
    pub body: String,
}

/// A service that can bookmark a URL on behalf of a user.
#[async_trait]
pub trait Bookmarker: Send + Sync {
    /// Bookmark `entry`. Only transport failures are errors; whatever status
    /// the service answers with is returned as-is.
    async fn add(&self, secret: &Secret, entry: &Entry) -> Result<BookmarkResponse>;
}

/// Instapaper "simple API" client (`POST /api/add`, form-encoded).
pub struct InstapaperClient {
    client: Client,
    api_url: String,
}

impl InstapaperClient {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl Bookmarker for InstapaperClient {
    async fn add(&self, secret: &Secret, entry: &Entry) -> Result<BookmarkResponse> {
        let form = [
            ("username", secret.user_name.as_str()),
            ("password", secret.password.as_str()),
            ("url", entry.url.as_str()),
        ];
        let response = self.client.post(&self.api_url).form(&form).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(BookmarkResponse { status, body })
    }
}

/// Result of publishing one batch of scraped entries.
#[derive(Debug, Clone, Default)]
pub struct PublishOutcome {
    /// History to persist for this run
    pub history: History,
    /// Entries sent to the bookmarking service
    pub posted: usize,
    /// Entries already present in the prior history
    pub skipped: usize,
}

/// Posts entries that are not yet in the history.
pub struct Publisher<'a> {
    bookmarker: &'a dyn Bookmarker,
    mode: HistoryMode,
}

impl<'a> Publisher<'a> {
    pub fn new(bookmarker: &'a dyn Bookmarker, mode: HistoryMode) -> Self {
        Self { bookmarker, mode }
    }

    /// Post every entry of `entries` that `prior` does not contain.
    ///
    /// The first transport failure aborts the batch; the partially built
    /// history is dropped with it.
    pub async fn publish(
        &self,
        secret: &Secret,
        prior: &History,
        entries: &[Entry],
    ) -> Result<PublishOutcome> {
        let mut outcome = PublishOutcome {
            history: match self.mode {
                HistoryMode::Replace => History::new(),
                HistoryMode::Accumulate => prior.clone(),
            },
            ..PublishOutcome::default()
        };

        for entry in entries {
            self.record(&mut outcome.history, entry);

            if prior.contains(entry) {
                log::info!("already posted : {}", entry.title);
                outcome.skipped += 1;
                continue;
            }

            log::info!("post : {} - {}", entry.title, entry.url);
            let response = self.bookmarker.add(secret, entry).await?;
            log::info!("    {} : {}", response.status, response.body.trim_end());
            outcome.posted += 1;
        }

        Ok(outcome)
    }

    fn record(&self, history: &mut History, entry: &Entry) {
        match self.mode {
            HistoryMode::Replace => history.add(entry.clone()),
            HistoryMode::Accumulate => {
                if !history.contains(entry) {
                    history.add(entry.clone());
                }
            }
        }
    }
}
