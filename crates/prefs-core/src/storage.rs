//! File wrappers around the codec.
//!
//! The playerPrefs file is a few dozen bytes, so it is always read and written
//! whole.  Writes go to a temporary file in the destination directory which is
//! then renamed over the target: on success the file holds the new record, on
//! failure it still holds the old one.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::codec::{decode, encode};
use crate::domain::Record;
use crate::error::DecodeError;

/// Error type for reading and writing the playerPrefs file.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// A file-system operation failed.
    #[error("I/O error accessing player prefs at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("I/O error on player prefs stream: {0}")]
    Stream(#[source] io::Error),

    /// The contents do not match the record schema.
    #[error("player prefs do not match the expected schema: {0}")]
    Decode(#[from] DecodeError),
}

impl PrefsError {
    fn io(path: &Path, source: io::Error) -> Self {
        PrefsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads and decodes the record stored at `path`.
///
/// One trailing line terminator (`\n` or `\r\n`) is tolerated, since editors
/// tend to add one; the game itself does not write it.
///
/// # Errors
///
/// Returns [`PrefsError::Io`] if the file cannot be read, or
/// [`PrefsError::Decode`] if its contents are not a valid record.
pub fn read(path: impl AsRef<Path>) -> Result<Record, PrefsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PrefsError::io(path, e))?;
    debug!("read {} bytes of player prefs from {}", content.len(), path.display());
    Ok(decode(strip_line_ending(&content))?)
}

/// Reads a whole stream and decodes it as one record.
///
/// # Errors
///
/// Returns [`PrefsError::Stream`] on read failure (including invalid UTF-8),
/// or [`PrefsError::Decode`].
pub fn read_from<R: Read>(mut reader: R) -> Result<Record, PrefsError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(PrefsError::Stream)?;
    Ok(decode(strip_line_ending(&content))?)
}

/// Encodes `record` and atomically replaces the file at `path`.
///
/// The file is created if missing.  When it already exists its permissions
/// are carried over to the replacement.
///
/// # Errors
///
/// Returns [`PrefsError::Decode`] if the record fails [`Record::validate`]
/// (the file is not touched), or [`PrefsError::Io`] if the temporary file
/// cannot be created, written, or renamed over `path`.
pub fn write(path: impl AsRef<Path>, record: &Record) -> Result<(), PrefsError> {
    let path = path.as_ref();
    record.validate()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PrefsError::io(dir, e))?;
    tmp.write_all(encode(record).as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| PrefsError::io(tmp.path(), e))?;

    match fs::metadata(path) {
        Ok(meta) => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| PrefsError::io(tmp.path(), e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(PrefsError::io(path, e)),
    }

    tmp.persist(path)
        .map_err(|e| PrefsError::io(path, e.error))?;
    debug!("wrote player prefs to {}", path.display());
    Ok(())
}

/// Encodes `record` into a stream.  No newline is appended.
///
/// # Errors
///
/// Returns [`PrefsError::Decode`] if the record fails [`Record::validate`],
/// or [`PrefsError::Stream`] on write failure.
pub fn write_to<W: Write>(mut writer: W, record: &Record) -> Result<(), PrefsError> {
    record.validate()?;
    writer
        .write_all(encode(record).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(PrefsError::Stream)
}

fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
