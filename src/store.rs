//! Saved palettes.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{error::StoreError, Color, Rgb};

/// A saved copy of a palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The colors, each in the encoding it was generated in.
    pub colors: Vec<String>,
    /// When the palette was saved, in local time.
    pub timestamp: String,
}

impl Snapshot {
    /// Format used for [`Snapshot::timestamp`].
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Read the stored colors back. Entries that can not be parsed come
    /// back black so positions do not shift.
    pub fn parse_colors(&self) -> Vec<Color> {
        self.colors
            .iter()
            .map(|text| {
                text.parse().unwrap_or_else(|err| {
                    tracing::warn!(color = %text, %err, "unreadable stored color");
                    Color::Hex(Rgb::BLACK)
                })
            })
            .collect()
    }
}

/// The current local time formatted as [`Snapshot::TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .format(Snapshot::TIMESTAMP_FORMAT)
        .to_string()
}

/// Somewhere to keep saved palettes.
pub trait SnapshotStore {
    /// Add a snapshot after all existing ones.
    fn append(&mut self, snapshot: Snapshot) -> Result<(), StoreError>;

    /// All snapshots, oldest first.
    fn list(&self) -> Result<Vec<Snapshot>, StoreError>;

    /// Remove every snapshot.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Keeps snapshots for the lifetime of the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    snapshots: Vec<Snapshot>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn append(&mut self, snapshot: Snapshot) -> Result<(), StoreError> {
        self.snapshots.push(snapshot);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Snapshot>, StoreError> {
        Ok(self.snapshots.clone())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.snapshots.clear();
        Ok(())
    }
}

/// Keeps snapshots as a JSON array in a single file. A missing file holds no
/// snapshots.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the file at `path`. Nothing is read or written until the store is
    /// used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write(&self, snapshots: &[Snapshot]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(snapshots).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                parent
            }
            None => Path::new("."),
        };

        // Readers see either the old file or the new one, never a partial write.
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn append(&mut self, snapshot: Snapshot) -> Result<(), StoreError> {
        let mut snapshots = self.list()?;
        snapshots.push(snapshot);
        self.write(&snapshots)?;
        tracing::info!(path = %self.path.display(), count = snapshots.len(), "saved palette");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Snapshot>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&json).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "cleared saved palettes");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
