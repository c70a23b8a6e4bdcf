//! Single-slot JSON persistence for the selected screen.
//!
//! The selected screen is the only state that survives a relaunch of the
//! same session; everything else (theme, filters, search text, card state)
//! is transient by design. The slot is a tiny versioned JSON file written
//! atomically (write-to-temp + rename) so a crash mid-write can never leave
//! a corrupt file behind.
//!
//! Restore is best-effort: any read problem — missing file, unreadable
//! contents, invalid JSON, unknown screen label — falls back to the default
//! screen without surfacing an error.

use crate::app::nav::ScreenId;
use crate::domain::error::{ForkfulError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Slot container format.
///
/// Versioned for future migrations; the screen is stored by its stable
/// label rather than an ordinal so reordering the enum cannot corrupt
/// restores.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotData {
    /// Version of the slot format.
    version: u32,

    /// Stable label of the selected screen.
    screen: String,

    /// Unix timestamp of the last write.
    saved_at: i64,
}

/// Single-slot screen persistence.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "screen": "favorites",
///   "saved_at": 1234567890
/// }
/// ```
pub struct ScreenSlot {
    /// Path to the slot file on disk.
    file_path: PathBuf,
}

impl ScreenSlot {
    /// Creates a slot handle for the given path.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Loads the persisted screen, falling back to [`ScreenId::Home`].
    ///
    /// Never fails: every problem downgrades to the default screen with a
    /// debug log, because a broken restore must not block the plugin.
    #[must_use]
    pub fn load(&self) -> ScreenId {
        let _span = tracing::debug_span!("slot_load", path = ?self.file_path).entered();

        let contents = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(error = %e, "no restorable slot, starting on Home");
                return ScreenId::Home;
            }
        };

        let data: SlotData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "slot unreadable, starting on Home");
                return ScreenId::Home;
            }
        };

        ScreenId::from_label(&data.screen).map_or_else(
            || {
                tracing::debug!(label = %data.screen, "unrecognized screen label, starting on Home");
                ScreenId::Home
            },
            |screen| {
                tracing::debug!(screen = screen.label(), "screen restored");
                screen
            },
        )
    }

    /// Persists the selected screen atomically.
    ///
    /// Writes to a temporary file first, then renames it over the slot, so
    /// the slot is never left half-written. Parent directories are created
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails. Callers treat the slot as best-effort and log the failure.
    pub fn save(&self, screen: ScreenId) -> Result<()> {
        let _span = tracing::debug_span!(
            "slot_save",
            path = ?self.file_path,
            screen = screen.label()
        )
        .entered();

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = SlotData {
            version: 1,
            screen: screen.slot_label().to_string(),
            saved_at: chrono::Utc::now().timestamp(),
        };

        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| ForkfulError::Restore(format!("failed to serialize slot: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("screen slot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slot_in(dir: &TempDir) -> ScreenSlot {
        ScreenSlot::new(dir.path().join("screen.json"))
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);

        for screen in ScreenId::ALL {
            slot.save(screen).unwrap();
            assert_eq!(slot.load(), screen);
        }
    }

    #[test]
    fn test_missing_slot_falls_back_to_home() {
        let dir = TempDir::new().unwrap();
        assert_eq!(slot_in(&dir).load(), ScreenId::Home);
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_home() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        std::fs::write(dir.path().join("screen.json"), "{not json").unwrap();
        assert_eq!(slot.load(), ScreenId::Home);
    }

    #[test]
    fn test_unknown_label_falls_back_to_home() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        std::fs::write(
            dir.path().join("screen.json"),
            r#"{"version": 1, "screen": "settings", "saved_at": 0}"#,
        )
        .unwrap();
        assert_eq!(slot.load(), ScreenId::Home);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let slot = ScreenSlot::new(dir.path().join("nested/deeper/screen.json"));
        slot.save(ScreenId::Profile).unwrap();
        assert_eq!(slot.load(), ScreenId::Profile);
    }
}
