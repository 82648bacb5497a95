//! Sticky notes note-taking application library
//!
//! This library provides functionality for creating, storing, searching, and
//! managing colored sticky notes persisted as one JSON file per note.

mod cli;
mod config;
mod errors;
mod note;
mod service;
mod store;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use note::*;
pub use service::*;
pub use store::*;
