//! Bookmarking API credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static username/password pair for the bookmarking API.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub user_name: String,
    pub password: String,
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
