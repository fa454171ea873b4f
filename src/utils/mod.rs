//! Utility functions and helpers.

pub mod http;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, keeping the offending text in the error.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
