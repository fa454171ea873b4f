// src/pipeline/run.rs

//! Scrape → publish → persist pipeline.

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::error::Result;
use crate::models::Config;
use crate::services::{
    Bookmarker, HistoryStore, InstapaperClient, PageScraper, Publisher, load_secret,
};
use crate::utils::http;

const TOTAL_STEPS: usize = 4;

/// Counters for one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Entries found on the source page
    pub scraped: usize,
    /// Entries sent to the bookmarking service
    pub posted: usize,
    /// Entries skipped because they were already in the history
    pub skipped: usize,
    /// Entries in the history file written at the end
    pub history_len: usize,
}

/// Run the pipeline against the configured source page and Instapaper.
pub async fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let client = http::create_client(&config.http)?;
    let bookmarker = InstapaperClient::new(client.clone(), &config.api.url);

    run_with(config, client, &bookmarker).await
}

/// Run the pipeline: secret → history → scrape → publish → save.
///
/// Stops at the first failing stage. Nothing is written unless every earlier
/// stage succeeded.
pub async fn run_with(
    config: &Config,
    client: Client,
    bookmarker: &dyn Bookmarker,
) -> Result<RunSummary> {
    let start_time = Utc::now();
    let scraper = PageScraper::new(client, &config.source)?;
    let store = HistoryStore::new(&config.config_dir);

    log::info!("Step 1/{TOTAL_STEPS}: Loading secret and history...");
    let secret = load_secret(&config.config_dir)?;
    let history = store.load()?;
    log::info!(
        "Loaded {} history entries from {}",
        history.len(),
        store.path().display()
    );

    log::info!("Step 2/{TOTAL_STEPS}: Fetching {}...", config.source.url);
    let entries = scraper.fetch_entries().await?;
    log::info!("Found {} entries", entries.len());
    if entries.is_empty() {
        log::warn!(
            "No entries matched '{}'; the page layout may have changed",
            config.source.container_selector
        );
    }

    log::info!("Step 3/{TOTAL_STEPS}: Posting new entries...");
    let outcome = Publisher::new(bookmarker, config.history.mode)
        .publish(&secret, &history, &entries)
        .await?;

    log::info!("Step 4/{TOTAL_STEPS}: Saving history...");
    store.save(&outcome.history)?;

    let summary = RunSummary {
        start_time,
        end_time: Utc::now(),
        scraped: entries.len(),
        posted: outcome.posted,
        skipped: outcome.skipped,
        history_len: outcome.history.len(),
    };

    log::info!(
        "Posted {} new, skipped {} known; history now holds {} entries ({} ms)",
        summary.posted,
        summary.skipped,
        summary.history_len,
        (summary.end_time - summary.start_time).num_milliseconds()
    );

    Ok(summary)
}
