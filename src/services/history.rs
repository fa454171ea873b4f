//! Local filesystem history store.
//!
//! ```text
//! {config_dir}/
//! ├── history.json      # { "entries": [ { "title", "url" }, ... ] }
//! └── history.json.tmp  # only present while a save is in flight
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{HISTORY_FILE, History};

/// Reads and writes `history.json` in a configuration directory.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store for `{config_dir}/history.json`.
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(HISTORY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history. A missing file is the first-run case and yields an
    /// empty history.
    pub fn load(&self) -> Result<History> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No history at {}, starting empty", self.path.display());
                return Ok(History::new());
            }
            Err(e) => return Err(AppError::config_file(&self.path, e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| AppError::config_file(&self.path, e))
    }

    /// Overwrite the history file (write to temp, then rename).
    pub fn save(&self, history: &History) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(history).map_err(io::Error::from)?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
