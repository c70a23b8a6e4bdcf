//! Path utilities for the Zellij plugin sandbox.
//!
//! Zellij mounts a per-plugin, persistent data directory at `/data` inside
//! the WASM sandbox. The restore slot and log files live there, so they
//! survive plugin reloads without requiring any filesystem permissions.

use std::path::PathBuf;

/// Returns the plugin's persistent data directory.
///
/// # Examples
///
/// ```
/// use forkful::infrastructure::get_data_dir;
///
/// let slot_path = get_data_dir().join("screen.json");
/// assert_eq!(slot_path.to_str().unwrap(), "/data/screen.json");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}
