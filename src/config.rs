use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where notes are stored
    pub notes_dir: PathBuf,
}

impl Config {
    /// Builds a config pointing at an explicit notes directory, or the
    /// platform default when none is given.
    pub fn new(notes_dir: Option<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.unwrap_or_else(Self::default_notes_dir),
        }
    }

    /// Platform-default notes directory, e.g. `~/.local/share/sticky-notes/notes`
    /// on Linux. Falls back to `./data` when no user data directory exists.
    pub fn default_notes_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("sticky-notes").join("notes"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}
