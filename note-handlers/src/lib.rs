//! # Note handlers
//!
//! Deterministic command processing for notes: help, save, list, delete. Runs in the
//! handler chain ahead of the AI fallback; an unmatched message falls through.

mod note_command_handler;


pub use note_command_handler::NoteCommandHandler;
