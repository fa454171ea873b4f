// src/config.rs

//! Configuration directory resolution.
//!
//! `secret.json`, `history.json` and the optional `config.toml` all live in
//! one directory: `$HBRE2IP_PATH` when set, otherwise the directory holding
//! the executable.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::Config;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "HBRE2IP_PATH";

/// Resolve the configuration directory for this process.
pub fn resolve_config_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| AppError::config(format!("cannot locate executable: {e}")))?;
    config_dir_from(env::var_os(CONFIG_DIR_ENV), &exe)
}

/// Pick the override if it is set and non-empty, else the executable's directory.
pub fn config_dir_from(override_dir: Option<OsString>, exe: &Path) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            AppError::config(format!("{} has no parent directory", exe.display()))
        }),
    }
}

/// Resolve the configuration directory and load settings from it.
pub fn load() -> Result<Config> {
    let dir = resolve_config_dir()?;
    Ok(Config::load_or_default(dir))
}
