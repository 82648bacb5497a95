//! Interactive menu loop for the sticky-notes application.
//!
//! The app owns the note service and translates menu choices into service
//! calls; all formatting and prompting lives here, none of it in the core.
use std::io::{self, Write};

use log::debug;

use crate::{Color, Note, NoteRepository, NoteService, Result};

/// CLI application handler - drives the menu and interfaces with the service
pub struct App<R: NoteRepository> {
    /// The note service backend
    service: NoteService<R>,
}

impl<R: NoteRepository> App<R> {
    /// Create a new CLI application over the given service
    pub fn new(service: NoteService<R>) -> Self {
        Self { service }
    }

    /// Run the interactive menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to Sticky Notes!");
        println!("========================");

        loop {
            print_menu();
            let choice = read_input("Enter your choice: ")?;

            match choice.as_str() {
                "1" => self.create_note()?,
                "2" => self.list_notes()?,
                "3" => self.update_note()?,
                "4" => self.delete_note()?,
                "5" => self.search_notes()?,
                "6" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                other => {
                    debug!("Unrecognized menu choice: {:?}", other);
                    println!("Invalid choice. Please try again.");
                }
            }
        }
    }

    fn create_note(&mut self) -> Result<()> {
        let content = read_input("Enter note content: ")?;
        let color = select_color()?;

        match self.service.create_note(&content, color.label()) {
            Ok(note) => println!("Note created successfully with ID: {}", note.id),
            Err(e) => println!("Error creating note: {}", e),
        }
        Ok(())
    }

    fn list_notes(&mut self) -> Result<()> {
        let notes = match self.service.get_all_notes() {
            Ok(notes) => notes,
            Err(e) => {
                println!("Error getting notes: {}", e);
                return Ok(());
            }
        };

        if notes.is_empty() {
            println!("No notes found.");
            return Ok(());
        }

        println!("\nYour Notes:");
        for note in &notes {
            print_note(note);
        }
        Ok(())
    }

    fn update_note(&mut self) -> Result<()> {
        let id = read_input("Enter note ID to update: ")?;

        let note = match self.service.get_note(&id) {
            Ok(note) => note,
            Err(e) => {
                println!("Error finding note: {}", e);
                return Ok(());
            }
        };

        println!("Current content: {}", note.content);
        let mut content = read_input("Enter new content (press Enter to keep current): ")?;
        if content.is_empty() {
            content = note.content.clone();
        }

        let color = select_color()?;

        match self.service.update_note(&id, &content, color.label()) {
            Ok(updated) => {
                println!("Note updated successfully!");
                print_note(&updated);
            }
            Err(e) => println!("Error updating note: {}", e),
        }
        Ok(())
    }

    fn delete_note(&mut self) -> Result<()> {
        let id = read_input("Enter note ID to delete: ")?;

        match self.service.delete_note(&id) {
            Ok(()) => println!("Note deleted successfully!"),
            Err(e) => println!("Error deleting note: {}", e),
        }
        Ok(())
    }

    fn search_notes(&mut self) -> Result<()> {
        let query = read_input("Enter search query: ")?;

        let notes = match self.service.search_notes(&query) {
            Ok(notes) => notes,
            Err(e) => {
                println!("Error searching notes: {}", e);
                return Ok(());
            }
        };

        if notes.is_empty() {
            println!("No matching notes found.");
            return Ok(());
        }

        println!("\nFound {} matching notes:", notes.len());
        for note in &notes {
            print_note(note);
        }
        Ok(())
    }
}

fn print_menu() {
    println!("\nMenu:");
    println!("1. Create new note");
    println!("2. List all notes");
    println!("3. Update note");
    println!("4. Delete note");
    println!("5. Search notes");
    println!("6. Exit");
}

/// Prompts for and reads one trimmed line from stdin.
fn read_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Presents the color menu and returns the chosen color, defaulting to yellow.
fn select_color() -> Result<Color> {
    println!("\nAvailable colors:");
    for (i, color) in Color::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, color);
    }

    let choice = read_input("Select color (1-5) [default: yellow]: ")?;
    let color = match choice.as_str() {
        "2" => Color::Blue,
        "3" => Color::Green,
        "4" => Color::Pink,
        "5" => Color::Orange,
        _ => Color::Yellow,
    };
    Ok(color)
}

fn print_note(note: &Note) {
    println!("\nID: {}", note.id);
    println!("Content: {}", note.content);
    println!("Color: {}", note.color);
    println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M:%S"));
    println!("------------------------");
}
