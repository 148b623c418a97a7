//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "libre-tl";

/// Returns the configuration directory for libre-tl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/libre-tl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/libre-tl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
