//! Append-only file history.
//!
//! Records are stored as:
//! ```text
//! [u32 LE length][bincode serialized HistoryRecord]
//! [u32 LE length][bincode serialized HistoryRecord]
//! ...
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record::HistoryRecord;
use super::store::HistoryStore;

/// Errors raised by the file-backed store.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encode(String),

    #[error("corrupted history at offset {offset}: {reason}")]
    Corrupted { offset: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// History stored in a single append-only file.
pub struct FileHistory {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileHistory {
    /// Open the file for appending, creating it and its directory if needed.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "opened history file");

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append and flush one record.
    pub fn try_append(&mut self, record: &HistoryRecord) -> Result<()> {
        let bytes = bincode::serialize(record).map_err(|e| HistoryError::Encode(e.to_string()))?;
        let len = u32::try_from(bytes.len()).map_err(|e| HistoryError::Encode(e.to_string()))?;

        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read every record in the file, oldest first.
    pub fn load_all(&self) -> Result<Vec<HistoryRecord>> {
        load_all(&self.path)
    }
}

impl HistoryStore for FileHistory {
    fn append(&mut self, record: &HistoryRecord) {
        if let Err(err) = self.try_append(record) {
            tracing::warn!(
                path = %self.path.display(),
                session = %record.session_id,
                error = %err,
                "failed to persist history record"
            );
        }
    }
}

/// Read every record from a history file.
///
/// A missing file is an empty history. A truncated or undecodable entry is
/// reported as `Corrupted`.
pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<HistoryRecord>> {
    let mut bytes = Vec::new();
    match File::open(path.as_ref()) {
        Ok(mut file) => {
            file.read_to_end(&mut bytes)?;
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    }

    let mut records = Vec::new();
    let mut offset = 0usize;
    while offset < bytes.len() {
        let corrupted = |reason: &str| HistoryError::Corrupted {
            offset: offset as u64,
            reason: reason.to_string(),
        };

        let header = bytes
            .get(offset..offset + 4)
            .ok_or_else(|| corrupted("truncated length prefix"))?;
        let len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;

        let body = bytes
            .get(offset + 4..offset + 4 + len)
            .ok_or_else(|| corrupted("truncated record"))?;
        let record: HistoryRecord =
            bincode::deserialize(body).map_err(|e| corrupted(&e.to_string()))?;

        records.push(record);
        offset += 4 + len;
    }

    Ok(records)
}
