// src/services/page.rs

//! Source page fetching and entry extraction.
//!
//! The page is scraped by layout: every direct child of the container element
//! is one item, its first link gives the URL and its title element gives the
//! title. Items without a link are dropped, and a page whose layout no longer
//! matches simply yields fewer (or zero) entries.

use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Entry, SourceConfig};
use crate::utils::parse_selector;

/// Compiled selectors describing where entries live on the page.
#[derive(Debug, Clone)]
pub struct EntrySelectors {
    container: Selector,
    link: Selector,
    title: Selector,
}

impl EntrySelectors {
    pub fn from_config(source: &SourceConfig) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&source.container_selector)?,
            link: parse_selector(&source.link_selector)?,
            title: parse_selector(&source.title_selector)?,
        })
    }
}

/// Extract entries from a parsed page, in document order.
pub fn extract_entries(document: &Html, selectors: &EntrySelectors) -> Vec<Entry> {
    document
        .select(&selectors.container)
        .flat_map(|container| container.children().filter_map(ElementRef::wrap))
        .filter_map(|item| extract_entry(item, selectors))
        .collect()
}

/// Zero or one entry per list item.
fn extract_entry(item: ElementRef<'_>, selectors: &EntrySelectors) -> Option<Entry> {
    let href = item.select(&selectors.link).next()?.value().attr("href")?;
    let title: String = item.select(&selectors.title).flat_map(|el| el.text()).collect();

    Some(Entry::new(title.trim(), href))
}

/// Downloads the source page and extracts its entries.
pub struct PageScraper {
    client: Client,
    url: String,
    selectors: EntrySelectors,
}

impl PageScraper {
    pub fn new(client: Client, source: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client,
            url: source.url.clone(),
            selectors: EntrySelectors::from_config(source)?,
        })
    }

    /// GET the page and extract its entries.
    ///
    /// Anything but `200 OK` is an [`AppError::HttpStatus`].
    pub async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::http_status(status.as_u16(), &self.url));
        }

        let html = response.text().await?;
        log::debug!("Fetched {} ({} bytes)", self.url, html.len());

        let document = Html::parse_document(&html);
        Ok(extract_entries(&document, &self.selectors))
    }
}
