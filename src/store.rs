//! Directory-backed persistence for note records.
//!
//! Each note is stored as one pretty-printed JSON file named `<id>.json`
//! inside the notes directory. All operations serialize through a single
//! in-process lock, so writes never interleave and a record file is always
//! replaced whole (temp file + atomic rename), never patched in place.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, error, info, trace, warn};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::{Note, NoteError, Result};

/// File extension used for note record files.
const RECORD_EXT: &str = "json";

/// Persistence seam between the note service and its backing store.
///
/// The production implementation is [`FileStore`]; tests substitute an
/// in-memory repository.
pub trait NoteRepository {
    /// Writes or overwrites the record for `note.id`.
    fn save(&self, note: &Note) -> Result<()>;

    /// Semantically identical to [`save`](NoteRepository::save); existence
    /// checks belong to the service, which fetches before updating.
    fn update(&self, note: &Note) -> Result<()>;

    /// Removes the record for `id`. Fails with `NoteNotFound` if absent.
    fn delete(&self, id: &str) -> Result<()>;

    /// Reads and deserializes the record for `id`.
    fn get_by_id(&self, id: &str) -> Result<Note>;

    /// Returns every decodable record, in unspecified directory order.
    fn get_all(&self) -> Result<Vec<Note>>;

    /// Case-insensitive substring match of `query` against note content.
    fn search(&self, query: &str) -> Result<Vec<Note>>;
}

/// Manages the storage and retrieval of notes on the file system.
pub struct FileStore {
    /// Directory holding one record file per note
    notes_dir: PathBuf,

    /// Serializes all file operations within this process
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a new FileStore rooted at `notes_dir`, creating the
    /// directory if it does not exist yet.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Result<Self> {
        let notes_dir = notes_dir.into();

        if !notes_dir.exists() {
            debug!(
                "Notes directory does not exist, creating: {}",
                notes_dir.display()
            );
            fs::create_dir_all(&notes_dir).map_err(|e| {
                error!("Failed to create notes directory: {}", e);
                NoteError::Directory {
                    path: notes_dir.clone(),
                    source: e,
                }
            })?;
        }

        Ok(Self {
            notes_dir,
            lock: Mutex::new(()),
        })
    }

    /// The directory this store persists records into.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Helper method to get the file path for a note
    fn record_path(&self, note_id: &str) -> PathBuf {
        self.notes_dir.join(format!("{}.{}", note_id, RECORD_EXT))
    }

    fn acquire(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|_| NoteError::LockAcquisitionFailed {
            message: "failed to acquire lock on note store".to_string(),
        })
    }

    /// Writes a record file using atomic operations to prevent data corruption
    fn write_record(&self, note: &Note) -> Result<()> {
        let file_path = self.record_path(&note.id);
        debug!("File path for note: {}", file_path.display());

        // Create a temporary file in the same directory (for atomic rename)
        let mut temp_file = NamedTempFile::new_in(&self.notes_dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            NoteError::Storage {
                operation: "save",
                id: note.id.clone(),
                source: e,
            }
        })?;

        trace!("Serializing note to JSON");
        let json = serde_json::to_string_pretty(note).map_err(|e| {
            error!("Failed to serialize note: {}", e);
            NoteError::Decode {
                path: file_path.clone(),
                source: e,
            }
        })?;

        trace!("Writing to temporary file");
        temp_file.write_all(json.as_bytes()).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            NoteError::Storage {
                operation: "save",
                id: note.id.clone(),
                source: e,
            }
        })?;

        temp_file.flush().map_err(|e| NoteError::Storage {
            operation: "save",
            id: note.id.clone(),
            source: e,
        })?;

        debug!("Performing atomic move of temporary file to final location");
        temp_file.persist(&file_path).map_err(|e| {
            error!(
                "Failed to persist file {}: {}",
                file_path.display(),
                e.error
            );
            NoteError::Storage {
                operation: "save",
                id: note.id.clone(),
                source: e.error,
            }
        })?;

        Ok(())
    }

    /// Reads and deserializes a single record file.
    fn read_record(&self, path: &Path, note_id: &str) -> Result<Note> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NoteError::NoteNotFound {
                    id: note_id.to_string(),
                }
            } else {
                error!("Failed to open note file {}: {}", path.display(), e);
                NoteError::Storage {
                    operation: "read",
                    id: note_id.to_string(),
                    source: e,
                }
            }
        })?;

        let note: Note = serde_json::from_str(&content).map_err(|e| NoteError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        trace!("Successfully loaded note: {}", note.id);
        Ok(note)
    }

    /// Scans the notes directory and loads every decodable record.
    ///
    /// Caller must hold the store lock. Records that fail to decode are
    /// skipped so a single corrupt file cannot fail the whole listing, but
    /// a directory that cannot be walked at all surfaces as an error.
    fn scan_records(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::new();

        for entry in WalkDir::new(&self.notes_dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // A failure at the root means the notes directory itself
                    // is unreadable; per-entry failures are skipped like
                    // corrupt records.
                    if e.path().map_or(true, |p| p == self.notes_dir) {
                        error!(
                            "Failed to read notes directory {}: {}",
                            self.notes_dir.display(),
                            e
                        );
                        let source = e.into_io_error().unwrap_or_else(|| {
                            std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                        });
                        return Err(NoteError::Directory {
                            path: self.notes_dir.clone(),
                            source,
                        });
                    }
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            // Only process JSON record files
            if !path.is_file() || !path.extension().is_some_and(|ext| ext == RECORD_EXT) {
                continue;
            }

            let note_id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();

            match self.read_record(path, &note_id) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    // Best-effort listing: log and move on
                    warn!("Skipping unreadable note file {}: {}", path.display(), e);
                }
            }
        }

        debug!("Loaded {} notes from {}", notes.len(), self.notes_dir.display());
        Ok(notes)
    }
}

impl NoteRepository for FileStore {
    fn save(&self, note: &Note) -> Result<()> {
        let _guard = self.acquire()?;
        info!("Saving note: {}", note.id);

        self.write_record(note)?;

        info!("Note saved successfully: {}", note.id);
        Ok(())
    }

    fn update(&self, note: &Note) -> Result<()> {
        let _guard = self.acquire()?;
        info!("Updating note: {}", note.id);

        // An update is a whole-file overwrite of the same record
        self.write_record(note)?;

        info!("Note {} updated successfully", note.id);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.acquire()?;
        info!("Deleting note: {}", id);

        let file_path = self.record_path(id);
        if !file_path.exists() {
            error!("Cannot delete note {}: record file not found", id);
            return Err(NoteError::NoteNotFound { id: id.to_string() });
        }

        fs::remove_file(&file_path).map_err(|e| {
            error!("Failed to delete note file {}: {}", file_path.display(), e);
            NoteError::Storage {
                operation: "delete",
                id: id.to_string(),
                source: e,
            }
        })?;

        info!("Note {} successfully deleted", id);
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<Note> {
        let _guard = self.acquire()?;
        debug!("Retrieving note by ID: {}", id);

        let file_path = self.record_path(id);
        self.read_record(&file_path, id)
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        let _guard = self.acquire()?;
        debug!("Listing all notes in {}", self.notes_dir.display());

        self.scan_records()
    }

    fn search(&self, query: &str) -> Result<Vec<Note>> {
        let _guard = self.acquire()?;
        info!("Searching notes with query: '{}'", query);

        let query = query.to_lowercase();
        let results: Vec<Note> = self
            .scan_records()?
            .into_iter()
            .filter(|note| note.content.to_lowercase().contains(&query))
            .collect();

        info!("Found {} matching notes", results.len());
        Ok(results)
    }
}
