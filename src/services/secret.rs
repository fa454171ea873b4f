//! Credential loading.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{SECRET_FILE, Secret};

/// Read and parse `secret.json` from the configuration directory.
///
/// A missing file is an error: there is nothing to post with.
pub fn load_secret(config_dir: &Path) -> Result<Secret> {
    let path = config_dir.join(SECRET_FILE);
    let bytes = fs::read(&path).map_err(|e| AppError::config_file(&path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::config_file(&path, e))
}
