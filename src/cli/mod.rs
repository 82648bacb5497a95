//! CLI module for the sticky-notes application
//!
//! This module handles the interactive menu loop and command-line
//! arguments for interacting with the note service.

mod app;
mod main;

pub use app::*;
pub use main::*;
