//! Pipeline entry points.
//!
//! - `run`: build the HTTP client and run every stage against the live services
//! - `run_with`: run every stage against a caller-supplied client and bookmarker

pub mod run;

pub use run::{RunSummary, run, run_with};
