//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe log writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage in the plugin's data
//! directory.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (2 MB).
const MAX_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Rotating log file writer.
///
/// Cheap to clone; clones share the same underlying file handle. When the
/// current file exceeds `MAX_FILE_SIZE_BYTES` it is renamed with a timestamp
/// suffix and a new file is created. Old backups beyond `MAX_BACKUP_FILES`
/// are removed.
///
/// Implements [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) so it can
/// back a `tracing-subscriber` fmt layer directly.
#[derive(Clone)]
pub struct LogWriter {
    inner: Arc<Inner>,
}

struct Inner {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    file: Mutex<Option<std::fs::File>>,
}

impl LogWriter {
    /// Creates a new writer for the given path.
    ///
    /// The file is not opened until the first write, so construction
    /// succeeds even if the file cannot be opened immediately.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                file: Mutex::new(None),
            }),
        }
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.inner.file.lock().map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            let opened = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.inner.file_path)?;
            *file = Some(opened);
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        handle.write_all(buf)?;
        handle.flush()?;

        Ok(buf.len())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// On rotation the current handle is dropped so the next write reopens
    /// the fresh file.
    fn check_and_rotate(&self, file: &mut Option<std::fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.inner.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Backups are named `<name>.log.<unix_timestamp>`.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self
            .inner
            .file_path
            .with_extension(format!("log.{timestamp}"));

        if self.inner.file_path.exists() {
            fs::rename(&self.inner.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes backup files beyond the retention limit.
    ///
    /// Scans the directory for `<name>.log.*` files, sorts by modification
    /// time (newest first), and deletes the rest. Individual deletion errors
    /// are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .inner
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .inner
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("file_path", &self.inner.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_append_to_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forkful.log");
        let writer = LogWriter::new(path.clone());

        writer.write_bytes(b"first line\n").unwrap();
        writer.write_bytes(b"second line\n").unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_clones_share_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forkful.log");
        let writer = LogWriter::new(path.clone());
        let clone = writer.clone();

        writer.write_bytes(b"a").unwrap();
        clone.write_bytes(b"b").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "ab");
    }
}
