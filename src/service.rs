//! Domain layer for note management.
//!
//! The service enforces field validation, assigns identity and timestamps,
//! and delegates all persistence to a [`NoteRepository`]. Every error from
//! the repository propagates to the caller unchanged.

use chrono::Utc;
use log::{debug, info};

use crate::{Color, Note, NoteError, NoteRepository, Result};

/// Validates and stamps notes before handing them to the repository.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new note from raw user input.
    ///
    /// The color is given as its textual label; an unknown label is a
    /// validation failure, as is empty content. Validation happens before
    /// any persistence attempt, so a failed create writes nothing.
    pub fn create_note(&self, content: &str, color: &str) -> Result<Note> {
        let color: Color = color.parse()?;
        let note = Note::new(content.to_string(), color);
        validate(&note)?;

        self.repo.save(&note)?;

        info!("Created note {}", note.id);
        Ok(note)
    }

    /// Replaces the content and color of an existing note.
    ///
    /// Fetches the note first, so updating an unknown id fails with
    /// `NoteNotFound`. `id` and `created_at` are never touched;
    /// `updated_at` is refreshed on success.
    pub fn update_note(&self, id: &str, content: &str, color: &str) -> Result<Note> {
        // Fetch first: an unknown id is NoteNotFound even when the new
        // fields would not validate.
        let mut note = self.repo.get_by_id(id)?;
        debug!("Fetched note {} for update", id);

        let color: Color = color.parse()?;
        note.content = content.to_string();
        note.color = color;
        note.updated_at = Utc::now();
        validate(&note)?;

        self.repo.update(&note)?;

        info!("Updated note {}", note.id);
        Ok(note)
    }

    /// Deletes a note by id. `NoteNotFound` propagates unchanged.
    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.repo.delete(id)
    }

    /// Fetches a single note by id.
    pub fn get_note(&self, id: &str) -> Result<Note> {
        self.repo.get_by_id(id)
    }

    /// Lists every note currently in the store.
    pub fn get_all_notes(&self) -> Result<Vec<Note>> {
        self.repo.get_all()
    }

    /// Case-insensitive substring search over note content.
    pub fn search_notes(&self, query: &str) -> Result<Vec<Note>> {
        self.repo.search(query)
    }
}

/// Domain validity check applied identically on create and update.
fn validate(note: &Note) -> Result<()> {
    if note.content.is_empty() {
        return Err(NoteError::Validation {
            field: "content",
            message: "note content cannot be empty".to_string(),
        });
    }
    // Color validity is guaranteed by the Color enum once parsed.
    Ok(())
}
