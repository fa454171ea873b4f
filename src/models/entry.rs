//! Scraped article link.

use serde::{Deserialize, Serialize};

/// One (title, URL) pair scraped from the source page.
///
/// Identity is the URL; the title is descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Article title, trimmed (empty if the page had none)
    pub title: String,

    /// Article URL exactly as it appeared in the `href`
    pub url: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Whether both entries point at the same article.
    pub fn same_url(&self, other: &Entry) -> bool {
        self.url == other.url
    }
}
