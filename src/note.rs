//! Core data structures for the sticky-notes application.
//!
//! This module contains the primary types used throughout the application,
//! the Note record and its fixed Color palette.
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::NoteError;

/// The closed set of colors a sticky note can carry.
///
/// Serialized as the lowercase label (`"yellow"`, `"blue"`, ...), which is
/// also the form accepted by [`Color::from_str`]. Any other label is a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Blue,
    Green,
    Pink,
    Orange,
}

impl Color {
    /// All valid colors, in menu order.
    pub const ALL: [Color; 5] = [
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Pink,
        Color::Orange,
    ];

    /// The lowercase label used on disk and in user-facing output.
    pub fn label(&self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Pink => "pink",
            Color::Orange => "orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the exact lowercase labels are valid; no normalization
        match s {
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "pink" => Ok(Color::Pink),
            "orange" => Ok(Color::Orange),
            other => Err(NoteError::Validation {
                field: "color",
                message: format!(
                    "invalid note color: {} (expected one of yellow, blue, green, pink, orange)",
                    other
                ),
            }),
        }
    }
}

/// Represents a single sticky note in our system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for the note, assigned once at creation
    pub id: String,
    /// Free-form note content
    pub content: String,
    /// Display color of the note
    pub color: Color,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with the given content and color.
    ///
    /// Assigns a fresh random identifier and stamps both timestamps with
    /// the current time, so `created_at == updated_at` on a new note.
    pub fn new(content: String, color: Color) -> Self {
        let now = Utc::now();

        Note {
            id: Uuid::new_v4().to_string(),
            content,
            color,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_labels_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.label().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn color_parse_rejects_unknown_label() {
        let err = "red".parse::<Color>().unwrap_err();
        assert!(matches!(err, NoteError::Validation { field: "color", .. }));
    }

    #[test]
    fn color_parse_accepts_only_exact_lowercase_labels() {
        assert!("YELLOW".parse::<Color>().is_err());
        assert!(" pink ".parse::<Color>().is_err());
        assert!("Blue".parse::<Color>().is_err());
    }

    #[test]
    fn new_note_stamps_identity_and_time() {
        let note = Note::new("buy milk".to_string(), Color::Blue);
        assert!(!note.id.is_empty());
        assert_eq!(note.created_at, note.updated_at);

        let other = Note::new("buy milk".to_string(), Color::Blue);
        assert_ne!(note.id, other.id);
    }

    #[test]
    fn note_serializes_color_as_lowercase_label() {
        let note = Note::new("hello".to_string(), Color::Orange);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"color\":\"orange\""));
    }
}
