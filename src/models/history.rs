//! Durable record of published entries.

use serde::{Deserialize, Deserializer, Serialize};

use super::Entry;

/// Ordered log of every entry published so far.
///
/// Membership is by exact URL string; duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct History {
    #[serde(default, deserialize_with = "null_as_empty")]
    entries: Vec<Entry>,
}

// Older history files store an empty history as `"entries": null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Entry>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff some stored entry has exactly the same URL.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.iter().any(|e| e.same_url(entry))
    }

    /// Append an entry, preserving insertion order.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for History {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for History {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
